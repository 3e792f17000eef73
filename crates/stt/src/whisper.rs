//! OpenAI-compatible Whisper STT provider.
//!
//! Talks to any `/audio/transcriptions` endpoint that accepts the OpenAI
//! multipart schema (OpenAI, Groq, and local Whisper servers).

use {
    async_trait::async_trait,
    reqwest::{
        Client,
        multipart::{Form, Part},
    },
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
};

use crate::{
    error::{Error, Result},
    provider::{SttProvider, TranscribeRequest, Transcript},
};

/// OpenAI API base URL.
const API_BASE: &str = "https://api.openai.com/v1";

/// Default Whisper model.
const DEFAULT_MODEL: &str = "whisper-1";

/// OpenAI-compatible Whisper STT provider.
#[derive(Clone)]
pub struct WhisperStt {
    client: Client,
    api_key: Option<Secret<String>>,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for WhisperStt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperStt")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for WhisperStt {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WhisperStt {
    /// Create a new Whisper STT provider.
    #[must_use]
    pub fn new(api_key: Option<Secret<String>>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            base_url: API_BASE.into(),
        }
    }

    /// Create with a custom model.
    #[must_use]
    pub fn with_model(api_key: Option<Secret<String>>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.into()),
            base_url: API_BASE.into(),
        }
    }

    /// Override the API base URL (local servers, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the API key, returning an error if not configured.
    fn get_api_key(&self) -> Result<&Secret<String>> {
        self.api_key
            .as_ref()
            .ok_or(Error::NotConfigured("whisper API key missing"))
    }
}

#[async_trait]
impl SttProvider for WhisperStt {
    fn id(&self) -> &'static str {
        "whisper"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn transcribe(&self, request: TranscribeRequest) -> Result<Transcript> {
        let api_key = self.get_api_key()?;

        // Fixed placeholder filename; the provider only inspects the
        // extension to pick a decoder.
        let filename = format!("audio.{}", request.format.extension());

        let file_part = Part::bytes(request.audio.to_vec())
            .file_name(filename)
            .mime_str(request.format.mime_type())
            .map_err(|e| Error::message(format!("failed to create file part: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.model.clone());

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        let parsed: TranscriptionResponse = response.json().await?;
        Ok(Transcript { text: parsed.text })
    }
}

// ── API Types ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let provider = WhisperStt::new(Some(Secret::new("sk-secret".into())));
        let debug = format!("{provider:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn unconfigured_provider_reports_it() {
        let provider = WhisperStt::default();
        assert!(!provider.is_configured());
    }

    #[test]
    fn response_parsing_ignores_extra_fields() {
        let json = r#"{
            "text": "hello world",
            "language": "english",
            "duration": 2.5,
            "segments": []
        }"#;
        let parsed: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    // ── Integration Tests with Mock Server ─────────────────────────────────

    mod integration {
        use {
            super::*,
            crate::provider::AudioFormat,
            bytes::Bytes,
            wiremock::{
                Mock, MockServer, ResponseTemplate,
                matchers::{header, method, path},
            },
        };

        #[tokio::test]
        async fn transcribe_success() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/transcriptions"))
                .and(header("Authorization", "Bearer test-api-key"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_string(r#"{"text": "hello world"}"#),
                )
                .mount(&mock_server)
                .await;

            let provider = WhisperStt::new(Some(Secret::new("test-api-key".into())))
                .with_base_url(mock_server.uri());

            let request = TranscribeRequest {
                audio: Bytes::from_static(b"fake audio data"),
                format: AudioFormat::Ogg,
            };

            let transcript = provider.transcribe(request).await.unwrap();
            assert_eq!(transcript.text, "hello world");
        }

        #[tokio::test]
        async fn transcribe_api_error_preserves_status_and_body() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/transcriptions"))
                .respond_with(
                    ResponseTemplate::new(413).set_body_string(r#"{"error": "file too large"}"#),
                )
                .mount(&mock_server)
                .await;

            let provider = WhisperStt::new(Some(Secret::new("test-api-key".into())))
                .with_base_url(mock_server.uri());

            let request = TranscribeRequest {
                audio: Bytes::from_static(b"audio"),
                format: AudioFormat::Mp3,
            };

            let err = provider.transcribe(request).await.unwrap_err();
            match err {
                Error::Api { status, body } => {
                    assert_eq!(status.as_u16(), 413);
                    assert!(body.contains("file too large"));
                },
                other => panic!("expected Api error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn transcribe_sends_model_field() {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/audio/transcriptions"))
                .and(wiremock::matchers::body_string_contains(
                    "whisper-large-v3",
                ))
                .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"text": "ok"}"#))
                .expect(1)
                .mount(&mock_server)
                .await;

            let provider = WhisperStt::with_model(
                Some(Secret::new("k".into())),
                Some("whisper-large-v3".into()),
            )
            .with_base_url(mock_server.uri());

            let request = TranscribeRequest {
                audio: Bytes::from_static(b"audio"),
                format: AudioFormat::Ogg,
            };

            provider.transcribe(request).await.unwrap();
        }

        #[tokio::test]
        async fn transcribe_without_key_fails_before_any_request() {
            let provider = WhisperStt::default();
            let request = TranscribeRequest {
                audio: Bytes::from_static(b"audio"),
                format: AudioFormat::Ogg,
            };
            let err = provider.transcribe(request).await.unwrap_err();
            assert!(matches!(err, Error::NotConfigured(_)));
        }
    }
}
