//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the narration service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the narration service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            SpeechError::SynthesisFailed("tts failure".to_string()).to_string(),
            "Synthesis failed: tts failure"
        );
        assert_eq!(
            SpeechError::Timeout(30000).to_string(),
            "Speech processing timeout after 30000ms"
        );
        assert_eq!(
            SpeechError::Configuration("bad url".to_string()).to_string(),
            "Configuration error: bad url"
        );
    }
}
