//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that narration adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::Narration;

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations convert plain text into a narrated-audio URL. Callers
/// are expected to strip markup before handing text over; the port does
/// no transformation of its own.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{TextToSpeech, SpeechError};
///
/// async fn narrate_post(
///     tts: &impl TextToSpeech,
///     text: &str,
/// ) -> Result<String, SpeechError> {
///     let narration = tts.synthesize(text).await?;
///     Ok(narration.audio_url)
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech from text
    ///
    /// # Arguments
    ///
    /// * `text` - Plain text to narrate (markup already stripped)
    ///
    /// # Returns
    ///
    /// Returns a `Narration` with the URL of the generated audio.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str) -> Result<Narration, SpeechError>;

    /// Check if the narration service is available
    ///
    /// # Returns
    ///
    /// Returns `true` if the service is ready to process requests.
    async fn is_available(&self) -> bool;
}
