use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use widget_embed_core::WidgetRequest;

use crate::api_error::ApiError;
use crate::query_types::WidgetQuery;
use crate::AppState;

/// `GET /api/render?type=...` — renders one widget as a standalone document.
pub async fn render_widget(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WidgetQuery>,
) -> Result<Response, ApiError> {
    let request = WidgetRequest::from_params(query.into_params())?;
    tracing::debug!(kind = %request.kind, params = request.params.len(), "rendering widget");
    let html = widget_embed_core::render_widget(&request)?;
    Ok(embeddable_html(&state, html))
}

/// Wraps a rendered document with headers allowing any origin to frame and cache it.
fn embeddable_html(state: &AppState, html: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8")),
            (header::CACHE_CONTROL, state.cache_control.clone()),
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("ALLOWALL")),
            (header::CONTENT_SECURITY_POLICY, HeaderValue::from_static("frame-ancestors *")),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        ],
        html,
    )
        .into_response()
}
