use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("telegram {method} returned {status}")]
    Api {
        method: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("file download failed: HTTP {status}")]
    Download { status: reqwest::StatusCode },
}

pub type Result<T> = std::result::Result<T, Error>;
