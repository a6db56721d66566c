//! Application state shared across handlers

use std::sync::Arc;

use application::PostPageService;
use infrastructure::AppConfig;

use crate::render::PageRenderer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Assembles the post page view state from the upstream services
    pub page_service: Arc<PostPageService>,
    /// Renders view state into HTML
    pub renderer: Arc<PageRenderer>,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
