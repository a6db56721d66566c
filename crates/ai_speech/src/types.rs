//! Speech synthesis types

use serde::{Deserialize, Serialize};

/// Result of a synthesis request
///
/// The narration service hosts the generated audio itself and returns a
/// URL; no audio bytes cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    /// URL of the synthesized audio
    pub audio_url: String,
}

impl Narration {
    /// Create a narration result
    #[must_use]
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
        }
    }

    /// Whether the narration points at an actual URL
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audio_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_url() {
        let narration = Narration::new("https://cdn.example.com/audio/1.mp3");
        assert_eq!(narration.audio_url, "https://cdn.example.com/audio/1.mp3");
        assert!(!narration.is_empty());
    }

    #[test]
    fn empty_url_is_empty() {
        assert!(Narration::new("").is_empty());
    }
}
