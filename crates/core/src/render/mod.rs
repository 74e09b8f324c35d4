//! Widget renderers: one per [`WidgetKind`], each a pure function from
//! parameters to a self-contained HTML document.

pub mod clock;
pub mod countdown;
mod document;
pub mod weather;

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::params::WidgetRequest;
use crate::widget_kind::WidgetKind;

pub use clock::{ClockFace, ClockParams};
pub use countdown::{CountdownParams, Remaining};
pub use weather::{DemoWeather, ForecastMode, Units, WeatherParams};

/// Renders a widget against the current time.
pub fn render_widget(request: &WidgetRequest) -> Result<String, CoreError> {
    render_widget_at(request, Utc::now())
}

/// Renders a widget with an explicit render time.
///
/// Only the countdown depends on `now` (its default date and final state).
pub fn render_widget_at(request: &WidgetRequest, now: DateTime<Utc>) -> Result<String, CoreError> {
    let params = &request.params;
    match request.kind {
        WidgetKind::Clock => clock::render(&ClockParams::from_params(params)),
        WidgetKind::Weather => weather::render(&WeatherParams::from_params(params)),
        WidgetKind::Countdown => countdown::render(&CountdownParams::from_params(params, now), now),
    }
}
