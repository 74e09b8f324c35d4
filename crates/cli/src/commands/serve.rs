use anyhow::Result;
use std::sync::Arc;
use widget_embed_core::RenderSettings;
use widget_embed_http::{create_router, AppState};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let settings = RenderSettings::from_env();
    tracing::info!(cache_max_age_secs = settings.cache_max_age_secs, "render settings loaded");
    let state = Arc::new(AppState::new(settings)?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
