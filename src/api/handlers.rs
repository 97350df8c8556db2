use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::render::PageView;

use super::AppState;
use super::models::SearchParams;

/// Renders the search page. Fetch failures are shown inside the page; only a
/// failed render turns into an error status.
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut view = PageView::new(params.q.unwrap_or_default());

    if !view.query.is_empty() {
        let start = Instant::now();
        match state.fetcher.fetch(&view.query).await {
            Ok(overview) => {
                log::info!(
                    "fetched ai overview for {:?} in {}ms",
                    view.query,
                    start.elapsed().as_millis()
                );
                view.overview = Some(overview);
            }
            Err(e) => {
                log::error!("error fetching ai overview for {:?}, error: {:#}", view.query, e);
                view.error = Some(e.to_string());
            }
        }
    }

    state.renderer.render(&view).map(Html).map_err(|e| {
        log::error!("error rendering page, error: {:#}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error rendering page".to_string(),
        )
    })
}
