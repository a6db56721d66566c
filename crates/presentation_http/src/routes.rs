//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Rendered pages
        .route("/post/{slug}", get(handlers::post_page::view_post))
        // Page state API (v1)
        .route("/v1/page/{slug}", get(handlers::post_page::page_state))
        // Attach state
        .with_state(state)
}
