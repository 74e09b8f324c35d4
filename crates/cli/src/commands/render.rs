use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use widget_embed_core::{render_widget_at, WidgetParams, WidgetRequest, TYPE_PARAM};

/// Renders one widget to stdout, applying the same validation as `/api/render`.
pub(crate) fn run(
    kind: String,
    params: Vec<(String, String)>,
    at: Option<DateTime<Utc>>,
) -> Result<()> {
    let params: WidgetParams =
        std::iter::once((TYPE_PARAM.to_owned(), kind)).chain(params).collect();
    let request = WidgetRequest::from_params(params).context("cannot render widget")?;
    let now = at.unwrap_or_else(Utc::now);
    tracing::debug!(kind = %request.kind, %now, "rendering widget");
    print!("{}", render_widget_at(&request, now)?);
    Ok(())
}
