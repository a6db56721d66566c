//! Wire models for the posts endpoint

use domain::Post;
use serde::{Deserialize, Serialize};

/// Response envelope of `GET /api/post/getposts`
///
/// The backend always wraps results in a `posts` array and attaches two
/// collection counters. The counters are informational here; only the
/// list itself drives the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsResponse {
    /// Matching posts, backend-provided order
    pub posts: Vec<Post>,
    /// Total number of posts in the collection
    #[serde(default, alias = "totalPosts")]
    pub total_posts: Option<u64>,
    /// Posts created within the last month
    #[serde(default, alias = "lastMonthPosts")]
    pub last_month_posts: Option<u64>,
}
