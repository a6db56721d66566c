//! Post catalog port - Interface for reading posts from the backend

use async_trait::async_trait;
use domain::{Post, Slug};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for post lookup operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostCatalogPort: Send + Sync {
    /// Fetch a single post by its slug
    ///
    /// # Arguments
    /// * `slug` - URL-safe lookup key
    ///
    /// # Returns
    /// The first matching post.
    async fn fetch_by_slug(&self, slug: &Slug) -> Result<Post, ApplicationError>;

    /// Fetch the most recent posts
    ///
    /// # Arguments
    /// * `limit` - Maximum number of posts to return
    ///
    /// # Returns
    /// Recent posts in backend-provided order.
    async fn fetch_recent(&self, limit: u8) -> Result<Vec<Post>, ApplicationError>;

    /// Check if the backend is reachable
    async fn is_available(&self) -> bool;
}
