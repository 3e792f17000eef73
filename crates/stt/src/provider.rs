//! Speech-to-Text provider abstraction.

use {async_trait::async_trait, bytes::Bytes};

use crate::error::Result;

/// Audio container formats accepted from the chat platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioFormat {
    /// Opus in OGG container (Telegram voice notes).
    #[default]
    Ogg,
    /// MP3 audio files.
    Mp3,
    /// MP4 container (videos and round video notes).
    Mp4,
}

impl AudioFormat {
    /// MIME type for this format.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Mp4 => "video/mp4",
        }
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
        }
    }
}

/// Request to transcribe audio to text.
#[derive(Debug, Clone)]
pub struct TranscribeRequest {
    /// Raw media data, consumed once and discarded after the call.
    pub audio: Bytes,
    /// Container format hint for the upload filename and MIME type.
    pub format: AudioFormat,
}

/// Transcription result.
///
/// Only the top-level text field is kept; provider extras such as
/// confidence, segments, or detected language are ignored.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
}

/// Speech-to-Text provider trait.
#[async_trait]
pub trait SttProvider: Send + Sync {
    /// Provider identifier (e.g., "whisper").
    fn id(&self) -> &'static str;

    /// Check if the provider is configured and ready.
    fn is_configured(&self) -> bool;

    /// Transcribe audio to text. A single blocking remote call; no retry
    /// or timeout policy beyond the transport defaults.
    async fn transcribe(&self, request: TranscribeRequest) -> Result<Transcript>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_extension_and_mime() {
        assert_eq!(AudioFormat::Ogg.extension(), "ogg");
        assert_eq!(AudioFormat::Ogg.mime_type(), "audio/ogg");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
        assert_eq!(AudioFormat::Mp4.mime_type(), "video/mp4");
    }

    #[test]
    fn default_format_is_voice_note() {
        assert_eq!(AudioFormat::default(), AudioFormat::Ogg);
    }
}
