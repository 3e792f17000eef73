//! The message-to-transcript orchestrator.

use {
    std::sync::Arc,
    tracing::{debug, trace, warn},
};

use {
    hearsay_stt::{AudioFormat, SttProvider, TranscribeRequest},
    hearsay_telegram::{
        TelegramClient, Update,
        classify::{Command, Inbound, MediaKind, MediaReference, classify},
        types::Message,
    },
};

use crate::reply::Outcome;

/// Upload ceiling of the transcription provider: 25 MiB.
pub const MAX_MEDIA_BYTES: u64 = 25 * 1024 * 1024;

/// Stateless per-update pipeline.
///
/// One invocation handles exactly one update, strictly sequentially; the
/// hosting server may run invocations concurrently for distinct updates.
pub struct Pipeline {
    telegram: TelegramClient,
    stt: Arc<dyn SttProvider>,
}

impl Pipeline {
    #[must_use]
    pub fn new(telegram: TelegramClient, stt: Arc<dyn SttProvider>) -> Self {
        Self { telegram, stt }
    }

    /// Process one webhook update.
    ///
    /// Never returns an error: every failure is handled here, logged for
    /// operators, and at most one reply is sent to the chat.
    pub async fn handle_update(&self, update: &Update) {
        let Some(msg) = update.message() else {
            trace!(update_id = update.update_id, "update carries no message");
            return;
        };

        match classify(msg) {
            Inbound::Command(Command::Start) => {
                // Standalone help message, deliberately not threaded.
                self.send(msg.chat.id, &Outcome::Help, msg.message_id).await;
            },
            Inbound::Media(media) => self.handle_media(msg, media).await,
            Inbound::Unhandled => {
                trace!(chat_id = msg.chat.id, "no transcribable media, ignoring");
            },
        }
    }

    async fn handle_media(&self, msg: &Message, media: MediaReference) {
        // The gate applies only when the platform declared a size;
        // attachments without one proceed straight to download.
        if media.declared_size.is_some_and(|size| size > MAX_MEDIA_BYTES) {
            self.send(msg.chat.id, &Outcome::TooLarge, msg.message_id).await;
            return;
        }

        // Working indicator; best-effort, failure swallowed by the client.
        self.telegram.send_typing(msg.chat.id).await;

        let outcome = match self.fetch_and_transcribe(&media).await {
            Ok(None) => Outcome::FetchFailed,
            Ok(Some(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Outcome::NoSpeech
                } else {
                    Outcome::Transcript(trimmed.to_owned())
                }
            },
            Err(e) => {
                // Full detail for operators; the user gets the generic reply.
                warn!(
                    chat_id = msg.chat.id,
                    file_id = %media.file_id,
                    error = %e,
                    "transcription pipeline failed"
                );
                Outcome::Failed
            },
        };

        self.send(msg.chat.id, &outcome, msg.message_id).await;
    }

    /// Fetch and transcribe one media reference.
    ///
    /// `Ok(None)` means file resolution failed (recoverable, reported as a
    /// fixed reply); `Err` covers download and transcription faults.
    async fn fetch_and_transcribe(&self, media: &MediaReference) -> anyhow::Result<Option<String>> {
        let Some(url) = self.telegram.resolve_file(&media.file_id).await else {
            return Ok(None);
        };

        let audio = self.telegram.download(&url).await?;
        debug!(
            file_id = %media.file_id,
            size = audio.len(),
            duration = media.duration,
            "downloaded media, transcribing"
        );

        let transcript = self
            .stt
            .transcribe(TranscribeRequest {
                audio,
                format: upload_format(media),
            })
            .await?;
        Ok(Some(transcript.text))
    }

    async fn send(&self, chat_id: i64, outcome: &Outcome, message_id: i64) {
        let reply_to = outcome.is_threaded().then_some(message_id);
        if let Err(e) = self.telegram.send_message(chat_id, outcome.text(), reply_to).await {
            warn!(chat_id, error = %e, "failed to send reply");
        }
    }
}

/// Upload format hint for the transcription provider, derived from the
/// attachment slot (and MIME type, for generic documents).
fn upload_format(media: &MediaReference) -> AudioFormat {
    match media.kind {
        MediaKind::Voice => AudioFormat::Ogg,
        MediaKind::VideoNote | MediaKind::Video => AudioFormat::Mp4,
        MediaKind::Audio => AudioFormat::Mp3,
        MediaKind::Document => match media.mime_type.as_deref() {
            Some(mime) if mime.starts_with("video/") => AudioFormat::Mp4,
            Some("audio/ogg") => AudioFormat::Ogg,
            _ => AudioFormat::Mp3,
        },
    }
}
