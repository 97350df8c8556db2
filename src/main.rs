use std::sync::Arc;

use overview::api::{AppState, create_router};
use overview::config::Config;
use overview::fetcher::OverviewFetcher;
use overview::render::Renderer;
use overview::serpapi::{Credential, SerpApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    let client = SerpApiClient::new(
        config.serpapi_base_url.clone(),
        Credential::Env(config.api_key_var.clone()),
        config.timeout,
    )?;
    let state = Arc::new(AppState {
        renderer: Renderer::new()?,
        fetcher: OverviewFetcher::new(client, config.locale.clone()),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("server running at http://{}", config.bind_addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
