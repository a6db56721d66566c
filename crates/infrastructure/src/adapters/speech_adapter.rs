//! Speech adapter - Implements `SpeechPort` using `ai_speech`

use ai_speech::{RemoteSpeechProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::ApplicationError;
use application::ports::SpeechPort;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for the narration service
#[derive(Debug, Clone)]
pub struct SpeechAdapter {
    provider: RemoteSpeechProvider,
}

impl SpeechAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = RemoteSpeechProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { provider })
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::InvalidResponse(e) => ApplicationError::Internal(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<String, ApplicationError> {
        let result = self.provider.synthesize(text).await.map_err(Self::map_error);

        match &result {
            Ok(narration) => debug!(audio_url = %narration.audio_url, "Narration ready"),
            Err(e) => debug!(error = %e, "Narration failed"),
        }

        result.map(|n| n.audio_url)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
