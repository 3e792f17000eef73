//! Speech-to-Text for hearsay.
//!
//! Provider-agnostic transcription abstraction with an implementation for
//! OpenAI-compatible `/audio/transcriptions` endpoints (OpenAI, Groq, and
//! other Whisper-compatible services).

pub mod error;
pub mod provider;
pub mod whisper;

pub use {
    error::{Error, Result},
    provider::{AudioFormat, SttProvider, TranscribeRequest, Transcript},
    whisper::WhisperStt,
};
