//! HTTP server for widget-embed.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::any::Any;
use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use widget_embed_core::RenderSettings;

use crate::api_error::ApiError;

pub use response_types::{TimezonesResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Rendering itself is stateless; this only carries response settings
/// resolved once at startup.
pub struct AppState {
    pub settings: RenderSettings,
    /// Pre-encoded `Cache-Control` header value.
    cache_control: HeaderValue,
}

impl AppState {
    pub fn new(settings: RenderSettings) -> anyhow::Result<Self> {
        let cache_control = HeaderValue::from_str(&settings.cache_control())
            .context("invalid Cache-Control header value")?;
        Ok(Self { settings, cache_control })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/health", get(handlers::meta::health))
        .route("/api/version", get(handlers::meta::version))
        .route("/api/timezones", get(handlers::meta::list_timezones))
        .route("/api/render", get(handlers::render::render_widget))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Turns a handler panic into the generic 500 response.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
