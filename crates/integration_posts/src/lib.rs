//! Posts REST API integration
//!
//! Client for the blog backend's posts endpoint
//! (`GET /api/post/getposts`). Provides lookup by slug and a bounded
//! recent-posts listing.

pub mod client;
mod models;

pub use client::{HttpPostCatalog, PostCatalogClient, PostsConfig, PostsError};
pub use models::PostsResponse;
