use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views;

/// All pages under the configured mount point, plus `/health` at the root.
pub fn router(state: AppState) -> Router {
    let paths = state.paths.clone();

    Router::new()
        .route(&paths.pattern("/"), get(views::index))
        .route(&paths.pattern("/{question_id}/"), get(views::detail))
        .route(&paths.pattern("/{question_id}/results/"), get(views::results))
        .route(&paths.pattern("/{question_id}/answer/"), post(views::answer))
        .route("/health", get(views::health))
        .fallback(views::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
