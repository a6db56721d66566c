//! Speech port - Interface for text-to-speech narration

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize narration for plain text
    ///
    /// # Arguments
    /// * `text` - Tag-stripped post body
    ///
    /// # Returns
    /// URL of the generated audio.
    async fn synthesize(&self, text: &str) -> Result<String, ApplicationError>;

    /// Check if the narration service is reachable
    async fn is_available(&self) -> bool;
}
