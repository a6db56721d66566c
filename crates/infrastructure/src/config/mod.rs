//! Application configuration
//!
//! Split into focused sections:
//! - `server`: HTTP server settings
//! - `posts`: posts backend (re-uses `integration_posts::PostsConfig`)
//! - `speech`: narration service (re-uses `ai_speech::SpeechConfig`)
//!
//! Values layer as defaults < `config.toml` < `VOCALPRESS_*` env vars.
//! The speech endpoint in particular is configuration here rather than
//! a hardcoded address; the default still points at the conventional
//! local port.

mod server;

use ai_speech::SpeechConfig;
use integration_posts::PostsConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Posts backend settings
    #[serde(default)]
    pub posts: PostsConfig,

    /// Narration service settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `config.toml` from the working directory if present, then
    /// applies `VOCALPRESS_*` environment overrides. Sections are
    /// separated with `__` so that snake_case keys survive the split
    /// (e.g. `VOCALPRESS_SERVER__PORT`, `VOCALPRESS_SPEECH__BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to parse or deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("posts.base_url", "http://localhost:3000")?
            .set_default("speech.base_url", "http://localhost:3000")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("VOCALPRESS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate cross-section consistency
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.speech.validate()?;
        if self.posts.base_url.trim().is_empty() {
            return Err("posts base_url cannot be empty".to_string());
        }
        Ok(())
    }
}
