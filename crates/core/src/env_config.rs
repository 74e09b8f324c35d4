//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::DEFAULT_CACHE_MAX_AGE_SECS;

/// Environment variable overriding the widget `Cache-Control` lifetime.
pub const CACHE_MAX_AGE_ENV: &str = "WIDGET_EMBED_CACHE_MAX_AGE";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Render-time settings shared by every widget response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Lifetime granted to both client and shared caches.
    pub cache_max_age_secs: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS }
    }
}

impl RenderSettings {
    /// Reads overrides from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache_max_age_secs: env_parse_with_default(
                CACHE_MAX_AGE_ENV,
                DEFAULT_CACHE_MAX_AGE_SECS,
            ),
        }
    }

    /// `Cache-Control` value permitting client and shared caching.
    #[must_use]
    pub fn cache_control(&self) -> String {
        let age = self.cache_max_age_secs;
        format!("public, max-age={age}, s-maxage={age}")
    }
}
