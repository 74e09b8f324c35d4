use std::fmt;

use thiserror::Error;

/// Errors produced while resolving or rendering a widget
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    #[error("Missing widget type")]
    MissingWidgetType,

    #[error("Invalid widget type: {0}")]
    InvalidWidgetType(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document formatting error")]
    Format(#[from] fmt::Error),
}

impl CoreError {
    /// True for errors caused by caller input rather than a rendering fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingWidgetType | Self::InvalidWidgetType(_))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
