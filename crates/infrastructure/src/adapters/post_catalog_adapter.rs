//! Post catalog adapter - Implements `PostCatalogPort` using `integration_posts`

use application::ApplicationError;
use application::ports::PostCatalogPort;
use async_trait::async_trait;
use domain::{Post, Slug};
use integration_posts::{HttpPostCatalog, PostCatalogClient, PostsConfig, PostsError};
use tracing::{debug, instrument};

/// Adapter for the posts backend
#[derive(Debug, Clone)]
pub struct PostCatalogAdapter {
    client: HttpPostCatalog,
}

impl PostCatalogAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = HttpPostCatalog::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: PostsConfig) -> Result<Self, ApplicationError> {
        let client = HttpPostCatalog::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration posts error to application error
    fn map_error(err: PostsError) -> ApplicationError {
        match err {
            PostsError::NotFound(slug) => ApplicationError::NotFound(slug),
            PostsError::ConnectionFailed(e)
            | PostsError::RequestFailed(e)
            | PostsError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            PostsError::ParseError(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl PostCatalogPort for PostCatalogAdapter {
    #[instrument(skip(self), fields(slug = %slug))]
    async fn fetch_by_slug(&self, slug: &Slug) -> Result<Post, ApplicationError> {
        let result = self.client.get_by_slug(slug).await.map_err(Self::map_error);

        match &result {
            Ok(post) => debug!(post_id = %post.id, "Retrieved post"),
            Err(e) => debug!(error = %e, "Failed to get post"),
        }

        result
    }

    #[instrument(skip(self))]
    async fn fetch_recent(&self, limit: u8) -> Result<Vec<Post>, ApplicationError> {
        let result = self.client.get_recent(limit).await.map_err(Self::map_error);

        match &result {
            Ok(posts) => debug!(count = posts.len(), "Retrieved recent posts"),
            Err(e) => debug!(error = %e, "Failed to get recent posts"),
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
