//! Request/query types (Deserialize)

use serde::Deserialize;
use widget_embed_core::WidgetParams;

/// Raw query pairs in arrival order.
///
/// Kept as a list rather than a map so a repeated key resolves to its first
/// occurrence.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct WidgetQuery(pub Vec<(String, String)>);

impl WidgetQuery {
    pub fn into_params(self) -> WidgetParams {
        self.0.into_iter().collect()
    }
}
