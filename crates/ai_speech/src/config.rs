//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Configuration for the narration service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Narration service base URL
    ///
    /// The synthesis endpoint lives at
    /// `{base_url}/api/textToSpeechfun/textToSpeech`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum text length accepted for synthesis, in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_text_chars() -> usize {
    20_000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("speech base_url cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("speech base_url must be http(s): {}", self.base_url));
        }
        if self.timeout_ms == 0 {
            return Err("speech timeout_ms must be non-zero".to_string());
        }
        if self.max_text_chars == 0 {
            return Err("speech max_text_chars must be non-zero".to_string());
        }
        Ok(())
    }
}
