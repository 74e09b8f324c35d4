//! Shared constants for widget-embed.
//!
//! Defaults applied by the parameter normalizer and the HTTP layer.

/// Default page background colour.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Default text colour.
pub const DEFAULT_TEXT_COLOR: &str = "#37352F";

/// Default clock timezone.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Default clock type.
pub const DEFAULT_CLOCK_TYPE: &str = "12h";

/// Default weather city (display only, never geocoded).
pub const DEFAULT_CITY: &str = "New York";

/// Default weather unit system.
pub const DEFAULT_UNITS: &str = "celsius";

/// Default weather forecast mode.
pub const DEFAULT_FORECAST: &str = "today";

/// Default countdown event name.
pub const DEFAULT_EVENT_NAME: &str = "Event";

/// Clock and countdown redraw period in milliseconds.
pub const FAST_REFRESH_MS: u32 = 1000;

/// Weather redraw period in milliseconds (30 minutes).
pub const WEATHER_REFRESH_MS: u32 = 1_800_000;

/// Default `Cache-Control` lifetime for rendered widgets, in seconds.
pub const DEFAULT_CACHE_MAX_AGE_SECS: u32 = 60;

/// Body returned for a missing or unknown `type` parameter.
pub const INVALID_WIDGET_TYPE_MESSAGE: &str =
    "Invalid widget type. Use: clock, weather, or countdown";

/// Body returned when rendering fails unexpectedly.
pub const RENDER_FAILURE_MESSAGE: &str = "Error generating widget";

/// Text shown once a countdown target has been reached.
pub const EVENT_PASSED_MESSAGE: &str = "Event has passed!";

/// Text shown by the weather widget when its update routine throws.
pub const WEATHER_ERROR_MESSAGE: &str = "Unable to load weather data";
