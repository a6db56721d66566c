//! Post page handlers
//!
//! `view_post` serves the server-rendered HTML page; `page_state`
//! exposes the same view state as JSON for clients that hydrate
//! themselves. Upstream failures do not surface as HTTP errors here:
//! the page renders whatever state assembly produced.

use application::PostPageState;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use domain::Slug;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Serve the rendered post page
#[instrument(skip(state))]
pub async fn view_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ApiError> {
    let slug = Slug::parse(slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let page = state.page_service.load_page(&slug).await;
    let html = state
        .renderer
        .render_page(&page)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(html))
}

/// Return the assembled page view state as JSON
#[instrument(skip(state))]
pub async fn page_state(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PostPageState>, ApiError> {
    let slug = Slug::parse(slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(state.page_service.load_page(&slug).await))
}
