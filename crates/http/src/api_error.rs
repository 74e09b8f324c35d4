//! Typed API error for HTTP handlers.
//!
//! Converts core errors into plain-text HTTP responses. Widget frames show the
//! body verbatim, so no JSON envelope is used.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use widget_embed_core::{CoreError, INVALID_WIDGET_TYPE_MESSAGE, RENDER_FAILURE_MESSAGE};

/// API error with HTTP status code and human-readable message.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 500 Internal Server Error — unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "error generating widget");
                (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_MESSAGE.to_owned())
            },
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_client_error() {
            tracing::warn!(error = %err, "rejected widget request");
            Self::BadRequest(INVALID_WIDGET_TYPE_MESSAGE.to_owned())
        } else {
            Self::Internal(err.into())
        }
    }
}
