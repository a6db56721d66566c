//! Post page service
//!
//! Assembles the state behind a single post page view: the post itself
//! (looked up by slug), a bounded list of recent posts, and a narrated
//! audio URL derived from the post's tag-stripped body.
//!
//! Failure domains are deliberately independent:
//! - a failed post lookup sets the page `error` flag and nothing else;
//! - a failed recent-posts lookup is logged and otherwise swallowed;
//! - a failed narration request is logged and leaves `speech_url` empty.
//!
//! No retries anywhere. The `error` flag is carried in the state even
//! though the HTML renderer never displays it; consumers of the JSON
//! page state rely on it being present.

use std::sync::Arc;

use domain::{Post, Slug};
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{PostCatalogPort, SpeechPort};

/// Fixed number of recent posts shown under the article
pub const RECENT_POSTS_LIMIT: u8 = 3;

/// Snapshot of everything the post page renders from
///
/// `loading` and `error` are independent flags; nothing ties them
/// together. `speech_url` uses the empty string for "absent".
#[derive(Debug, Clone, Serialize)]
pub struct PostPageState {
    /// Main post lookup still in flight
    pub loading: bool,
    /// Main post lookup failed
    pub error: bool,
    /// The post being viewed, if loaded
    pub post: Option<Post>,
    /// Recent posts, if their independent lookup succeeded
    pub recent_posts: Option<Vec<Post>>,
    /// Narrated audio URL, empty until synthesis succeeds
    pub speech_url: String,
    /// Narration request in flight
    pub speech_url_loading: bool,
}

impl Default for PostPageState {
    fn default() -> Self {
        Self {
            loading: true,
            error: false,
            post: None,
            recent_posts: None,
            speech_url: String::new(),
            speech_url_loading: false,
        }
    }
}

impl PostPageState {
    /// Whether the audio block should show its textual placeholder
    ///
    /// True iff no narration URL is stored or synthesis is in flight;
    /// the audio player is shown in exactly the complementary case.
    #[must_use]
    pub fn audio_placeholder_visible(&self) -> bool {
        self.speech_url.is_empty() || self.speech_url_loading
    }
}

/// Service assembling the post page state
pub struct PostPageService {
    posts: Arc<dyn PostCatalogPort>,
    speech: Arc<dyn SpeechPort>,
}

impl std::fmt::Debug for PostPageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostPageService").finish_non_exhaustive()
    }
}

impl PostPageService {
    /// Create a new service over the given ports
    #[must_use]
    pub fn new(posts: Arc<dyn PostCatalogPort>, speech: Arc<dyn SpeechPort>) -> Self {
        Self { posts, speech }
    }

    /// Load the full page state for a slug
    ///
    /// The post and recent-posts lookups run concurrently; the
    /// narration request runs afterwards because it consumes the post's
    /// content. Narration re-fires for every load, even when the
    /// content is unchanged.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn load_page(&self, slug: &Slug) -> PostPageState {
        let mut state = PostPageState::default();

        let (post_result, recent_result) = tokio::join!(
            self.posts.fetch_by_slug(slug),
            self.posts.fetch_recent(RECENT_POSTS_LIMIT),
        );

        match post_result {
            Ok(post) => {
                debug!(post_id = %post.id, "Post loaded");
                state.post = Some(post);
                state.error = false;
            },
            Err(e) => {
                debug!(error = %e, "Post lookup failed");
                state.error = true;
            },
        }
        state.loading = false;

        match recent_result {
            Ok(posts) => {
                debug!(count = posts.len(), "Recent posts loaded");
                state.recent_posts = Some(posts);
            },
            // Isolation: a recent-posts failure never touches the main
            // post's error or loading state.
            Err(e) => warn!(error = %e, "Recent posts lookup failed"),
        }

        if let Some(post) = &state.post {
            state.speech_url_loading = true;
            match self.request_narration(post).await {
                Ok(url) => state.speech_url = url,
                Err(e) => error!(error = %e, "Narration request failed"),
            }
            state.speech_url_loading = false;
        }

        state
    }

    async fn request_narration(&self, post: &Post) -> Result<String, ApplicationError> {
        let text = post.stripped_content();
        self.speech.synthesize(&text).await
    }

    /// Check whether the posts backend is reachable
    pub async fn posts_available(&self) -> bool {
        self.posts.is_available().await
    }

    /// Check whether the narration service is reachable
    pub async fn speech_available(&self) -> bool {
        self.speech.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockPostCatalogPort, MockSpeechPort};
    use domain::PostId;
    use mockall::predicate::eq;

    fn sample_post() -> Post {
        Post::new(
            PostId::parse("1").unwrap(),
            "Hello World",
            Slug::parse("hello-world").unwrap(),
            "<p>Hi</p>",
        )
        .with_category("general")
        .with_image("img.png")
    }

    fn service(posts: MockPostCatalogPort, speech: MockSpeechPort) -> PostPageService {
        PostPageService::new(Arc::new(posts), Arc::new(speech))
    }

    #[tokio::test]
    async fn load_page_success_populates_everything() {
        let mut posts = MockPostCatalogPort::new();
        posts
            .expect_fetch_by_slug()
            .returning(|_| Ok(sample_post()));
        posts
            .expect_fetch_recent()
            .with(eq(RECENT_POSTS_LIMIT))
            .returning(|_| Ok(vec![sample_post()]));

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|text| text == "Hi")
            .returning(|_| Ok("https://cdn.example.com/a.mp3".to_string()));

        let slug = Slug::parse("hello-world").unwrap();
        let state = service(posts, speech).load_page(&slug).await;

        assert!(!state.loading);
        assert!(!state.error);
        assert_eq!(state.post.unwrap().title, "Hello World");
        assert_eq!(state.recent_posts.unwrap().len(), 1);
        assert_eq!(state.speech_url, "https://cdn.example.com/a.mp3");
        assert!(!state.speech_url_loading);
    }

    #[tokio::test]
    async fn post_failure_sets_error_and_skips_narration() {
        let mut posts = MockPostCatalogPort::new();
        posts
            .expect_fetch_by_slug()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 404".to_string())));
        posts.expect_fetch_recent().returning(|_| Ok(vec![]));

        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().times(0);

        let slug = Slug::parse("gone").unwrap();
        let state = service(posts, speech).load_page(&slug).await;

        assert!(state.error);
        assert!(!state.loading);
        assert!(state.post.is_none());
        assert!(state.speech_url.is_empty());
        assert!(!state.speech_url_loading);
    }

    #[tokio::test]
    async fn recent_failure_never_touches_main_post_state() {
        let mut posts = MockPostCatalogPort::new();
        posts
            .expect_fetch_by_slug()
            .returning(|_| Ok(sample_post()));
        posts
            .expect_fetch_recent()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 500".to_string())));

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .returning(|_| Ok("https://cdn.example.com/a.mp3".to_string()));

        let slug = Slug::parse("hello-world").unwrap();
        let state = service(posts, speech).load_page(&slug).await;

        // Isolation property: the main post view is unaffected.
        assert!(!state.error);
        assert!(!state.loading);
        assert!(state.post.is_some());
        assert!(state.recent_posts.is_none());
    }

    #[tokio::test]
    async fn speech_failure_leaves_url_empty_and_error_clear() {
        let mut posts = MockPostCatalogPort::new();
        posts
            .expect_fetch_by_slug()
            .returning(|_| Ok(sample_post()));
        posts.expect_fetch_recent().returning(|_| Ok(vec![]));

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .returning(|_| Err(ApplicationError::ExternalService("tts failure".to_string())));

        let slug = Slug::parse("hello-world").unwrap();
        let state = service(posts, speech).load_page(&slug).await;

        assert!(state.speech_url.is_empty());
        assert!(!state.speech_url_loading);
        assert!(!state.error);
        assert!(state.audio_placeholder_visible());
    }

    #[tokio::test]
    async fn narration_receives_stripped_content() {
        let mut posts = MockPostCatalogPort::new();
        posts.expect_fetch_by_slug().returning(|_| {
            Ok(Post::new(
                PostId::parse("2").unwrap(),
                "Nested",
                Slug::parse("nested").unwrap(),
                "<div><p>Hello <b>World</b></p></div>",
            ))
        });
        posts.expect_fetch_recent().returning(|_| Ok(vec![]));

        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|text| text == "Hello World")
            .times(1)
            .returning(|_| Ok("url".to_string()));

        let slug = Slug::parse("nested").unwrap();
        let state = service(posts, speech).load_page(&slug).await;

        assert_eq!(state.speech_url, "url");
    }

    #[test]
    fn default_state_is_loading() {
        let state = PostPageState::default();
        assert!(state.loading);
        assert!(!state.error);
        assert!(state.post.is_none());
        assert!(state.recent_posts.is_none());
        assert!(state.speech_url.is_empty());
        assert!(!state.speech_url_loading);
    }

    #[test]
    fn audio_placeholder_rule() {
        let mut state = PostPageState::default();
        assert!(state.audio_placeholder_visible());

        state.speech_url = "https://cdn.example.com/a.mp3".to_string();
        assert!(!state.audio_placeholder_visible());

        state.speech_url_loading = true;
        assert!(state.audio_placeholder_visible());

        state.speech_url.clear();
        state.speech_url_loading = false;
        assert!(state.audio_placeholder_visible());
    }
}
