//! Posts API client
//!
//! HTTP client for the blog backend's posts endpoint.

use async_trait::async_trait;
use domain::{Post, Slug};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::PostsResponse;

/// Posts client errors
#[derive(Debug, Error)]
pub enum PostsError {
    /// Connection to the backend failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the backend failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the backend
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No post exists for the given slug
    #[error("No post found for slug: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Posts API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    /// Backend base URL (default: <http://localhost:3000>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Posts client trait for fetching posts
#[async_trait]
pub trait PostCatalogClient: Send + Sync {
    /// Get a single post by its slug
    ///
    /// The backend returns a filtered list; the first element wins,
    /// regardless of list length.
    async fn get_by_slug(&self, slug: &Slug) -> Result<Post, PostsError>;

    /// Get the most recent posts, bounded by `limit`
    async fn get_recent(&self, limit: u8) -> Result<Vec<Post>, PostsError>;

    /// Check if the backend is healthy
    async fn is_healthy(&self) -> bool;
}

/// HTTP implementation of the posts client
#[derive(Debug, Clone)]
pub struct HttpPostCatalog {
    client: Client,
    config: PostsConfig,
}

impl HttpPostCatalog {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PostsConfig) -> Result<Self, PostsError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PostsError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, PostsError> {
        Self::new(PostsConfig::default())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/post/getposts", self.config.base_url)
    }

    /// Fetch the endpoint with the given query and decode the envelope
    async fn fetch(&self, query: &[(&str, String)]) -> Result<PostsResponse, PostsError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PostsError::ConnectionFailed(e.to_string())
                } else {
                    PostsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(PostsError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(PostsError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| PostsError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl PostCatalogClient for HttpPostCatalog {
    #[instrument(skip(self), fields(slug = %slug))]
    async fn get_by_slug(&self, slug: &Slug) -> Result<Post, PostsError> {
        debug!("Fetching post by slug");

        let envelope = self
            .fetch(&[("slug", slug.as_str().to_string())])
            .await?;

        envelope
            .posts
            .into_iter()
            .next()
            .ok_or_else(|| PostsError::NotFound(slug.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u8) -> Result<Vec<Post>, PostsError> {
        debug!("Fetching recent posts");

        let envelope = self.fetch(&[("limit", limit.to_string())]).await?;
        Ok(envelope.posts)
    }

    async fn is_healthy(&self) -> bool {
        self.get_recent(1).await.is_ok()
    }
}
