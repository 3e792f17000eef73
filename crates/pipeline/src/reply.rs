//! User-facing reply composition.
//!
//! Raw error detail stays in operator logs; users only ever see one of the
//! fixed texts below or the transcript itself.

/// Static help reply for `/start` in a one-to-one chat.
pub const HELP_TEXT: &str =
    "Send me a voice message, video note, or audio file and I'll reply with the transcript.";

/// Declared size exceeds the transcription provider's upload ceiling.
pub const TOO_LARGE_TEXT: &str = "That file is too large to transcribe (25 MB limit).";

/// File resolution failed (expired, malformed id, platform outage).
pub const FETCH_FAILED_TEXT: &str =
    "I couldn't retrieve that file from Telegram. It may have expired — try sending it again.";

/// Transcription succeeded but produced no usable text.
pub const NO_SPEECH_TEXT: &str = "I didn't detect any speech in that file.";

/// Generic failure reply; never carries error detail.
pub const FAILURE_TEXT: &str = "Something went wrong while transcribing. Please try again later.";

/// Terminal outcome of processing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Help,
    TooLarge,
    FetchFailed,
    Transcript(String),
    NoSpeech,
    Failed,
}

impl Outcome {
    /// The reply text for this outcome.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Help => HELP_TEXT,
            Self::TooLarge => TOO_LARGE_TEXT,
            Self::FetchFailed => FETCH_FAILED_TEXT,
            Self::Transcript(text) => text,
            Self::NoSpeech => NO_SPEECH_TEXT,
            Self::Failed => FAILURE_TEXT,
        }
    }

    /// Whether the reply is threaded to the originating message. Only the
    /// standalone help reply is not.
    #[must_use]
    pub fn is_threaded(&self) -> bool {
        !matches!(self, Self::Help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_outcome_carries_its_own_text() {
        let outcome = Outcome::Transcript("hello world".into());
        assert_eq!(outcome.text(), "hello world");
        assert!(outcome.is_threaded());
    }

    #[test]
    fn help_is_the_only_unthreaded_outcome() {
        assert!(!Outcome::Help.is_threaded());
        for outcome in [
            Outcome::TooLarge,
            Outcome::FetchFailed,
            Outcome::NoSpeech,
            Outcome::Failed,
        ] {
            assert!(outcome.is_threaded(), "{outcome:?} must be threaded");
        }
    }

    #[test]
    fn failure_reply_carries_no_detail_placeholders() {
        assert!(!FAILURE_TEXT.contains('{'));
        assert!(!FETCH_FAILED_TEXT.contains('{'));
    }
}
