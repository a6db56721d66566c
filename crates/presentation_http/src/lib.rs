//! Vocalpress HTTP presentation layer
//!
//! This crate serves the rendered post page and its JSON view state.

pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use render::{PageRenderer, RenderError};
pub use routes::create_router;
pub use state::AppState;
