use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::fetcher::OverviewFetcher;
use crate::render::Renderer;

pub mod handlers;
pub mod models;

/// Shared, read-only state handed to every request.
#[derive(Debug)]
pub struct AppState {
    pub renderer: Renderer,
    pub fetcher: OverviewFetcher,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
