use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use widget_embed_core::{DEFAULT_TIMEZONE, TIMEZONES};

use crate::response_types::{TimezonesResponse, VersionResponse};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

/// Curated zones for widget configurators on other origins.
pub async fn list_timezones() -> Response {
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(TimezonesResponse { timezones: TIMEZONES, default: DEFAULT_TIMEZONE }),
    )
        .into_response()
}
