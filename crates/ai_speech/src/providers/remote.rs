//! Remote narration service provider
//!
//! Implements `TextToSpeech` against the narration service's HTTP API:
//! `POST {base_url}/api/textToSpeechfun/textToSpeech` with a JSON body
//! `{"text": ...}`. Success responses carry `{"audioUrl": ...}`; error
//! responses carry `{"error": ...}` alongside a non-2xx status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::Narration;

/// Path of the synthesis endpoint, relative to the configured base URL
const SYNTHESIS_PATH: &str = "/api/textToSpeechfun/textToSpeech";

/// Remote narration service provider
#[derive(Debug, Clone)]
pub struct RemoteSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl RemoteSpeechProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is
    /// invalid or the HTTP client fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the synthesis endpoint URL
    fn synthesis_url(&self) -> String {
        format!("{}{SYNTHESIS_PATH}", self.config.base_url)
    }
}

/// Synthesis request body
#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
}

/// Synthesis success response
#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    #[serde(rename = "audioUrl")]
    audio_url: String,
}

/// Narration service error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

#[async_trait]
impl TextToSpeech for RemoteSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<Narration, SpeechError> {
        debug!("Requesting narration");

        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        if text.len() > self.config.max_text_chars {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {} characters exceeds {} limit",
                text.len(),
                self.config.max_text_chars
            )));
        }

        let response = self
            .client
            .post(self.synthesis_url())
            .json(&SynthesisRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return Err(SpeechError::SynthesisFailed(api_error.error));
            }

            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let body: SynthesisResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        if body.audio_url.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Response carried an empty audioUrl".to_string(),
            ));
        }

        debug!(audio_url = %body.audio_url, "Narration complete");

        Ok(Narration::new(body.audio_url))
    }

    async fn is_available(&self) -> bool {
        // The service has no health endpoint; probe the base URL and
        // treat any HTTP response as a sign of life.
        match self
            .client
            .get(&self.config.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!("Narration service availability check failed: {}", e);
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(mock_server: &MockServer) -> RemoteSpeechProvider {
        let config = SpeechConfig {
            base_url: mock_server.uri(),
            ..Default::default()
        };
        RemoteSpeechProvider::new(config).unwrap()
    }

    #[tokio::test]
    async fn synthesize_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/textToSpeechfun/textToSpeech"))
            .and(body_json(serde_json::json!({"text": "Hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioUrl": "https://cdn.example.com/audio/1.mp3"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);

        let narration = provider.synthesize("Hi").await.unwrap();

        assert_eq!(narration.audio_url, "https://cdn.example.com/audio/1.mp3");
    }

    #[tokio::test]
    async fn synthesize_service_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/textToSpeechfun/textToSpeech"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": "tts failure"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);

        let result = provider.synthesize("Hi").await;

        match result {
            Err(SpeechError::SynthesisFailed(msg)) => assert_eq!(msg, "tts failure"),
            other => unreachable!("Expected SynthesisFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn synthesize_non_json_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/textToSpeechfun/textToSpeech"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);

        let result = provider.synthesize("Hi").await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_empty_text_fails() {
        let mock_server = MockServer::start().await;
        let provider = create_test_provider(&mock_server);

        let result = provider.synthesize("").await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_text_too_long_fails() {
        let mock_server = MockServer::start().await;
        let provider = RemoteSpeechProvider::new(SpeechConfig {
            base_url: mock_server.uri(),
            max_text_chars: 10,
            ..Default::default()
        })
        .unwrap();

        let result = provider.synthesize("abcdefghijk").await;

        assert!(matches!(result, Err(SpeechError::SynthesisFailed(_))));
    }

    #[tokio::test]
    async fn synthesize_empty_audio_url_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/textToSpeechfun/textToSpeech"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"audioUrl": ""})),
            )
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);

        let result = provider.synthesize("Hi").await;

        assert!(matches!(result, Err(SpeechError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn is_available_when_service_responds() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);

        assert!(provider.is_available().await);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SpeechConfig {
            base_url: String::new(),
            ..Default::default()
        };

        let result = RemoteSpeechProvider::new(config);

        assert!(matches!(result, Err(SpeechError::Configuration(_))));
    }
}
