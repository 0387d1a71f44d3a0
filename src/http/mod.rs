pub mod api;
pub mod error;
pub mod files;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/gallery", get(api::gallery_index))
        .route("/api/gallery/{id}", get(api::gallery_album))
        .route("/api/projects", get(api::projects))
        .route("/api/partners", get(api::partners))
        .route("/images/{*path}", get(files::serve_image))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
