//! Post entity
//!
//! A content item with a title, category, image, and HTML body. The
//! backend owns posts; this layer holds a read-only, transient copy for
//! the duration of a page view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::markup::strip_tags;
use crate::value_objects::{PostId, Slug};

/// Default category assigned by the backend when none was chosen
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// A blog post
///
/// The serde aliases accept the backend's MongoDB-style wire names
/// (`_id`, `createdAt`, `updatedAt`) while keeping idiomatic field
/// names here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Backend-assigned identifier
    #[serde(alias = "_id")]
    pub id: PostId,
    /// Post title
    pub title: String,
    /// URL-safe lookup key
    pub slug: Slug,
    /// Category name
    #[serde(default = "default_category")]
    pub category: String,
    /// Cover image URL
    #[serde(default)]
    pub image: String,
    /// HTML body, pre-sanitized by the backend
    pub content: String,
    /// Creation timestamp
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Post {
    /// Create a new post
    #[must_use]
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        slug: Slug,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            slug,
            category: default_category(),
            image: String::new(),
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the cover image URL
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// The post body with all markup tags removed
    ///
    /// Used as the input for speech synthesis. Recomputed on each call;
    /// no memoization by content hash.
    #[must_use]
    pub fn stripped_content(&self) -> String {
        strip_tags(&self.content)
    }
}
