use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Provider rejected the request. The response body is preserved for
    /// operator diagnostics and must never be forwarded to end users.
    #[error("transcription request failed: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("STT provider not configured: {0}")]
    NotConfigured(&'static str),

    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
