//! Inbound message classification.
//!
//! Every update is decoded into exactly one of [`Inbound::Command`],
//! [`Inbound::Media`], or [`Inbound::Unhandled`] before any further logic
//! runs; nothing downstream branches on raw optional fields.

use crate::types::Message;

/// Text that triggers the static help reply in a one-to-one chat.
pub const GREETING_COMMAND: &str = "/start";

/// Recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
}

/// Which attachment slot a media reference was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Voice,
    VideoNote,
    Audio,
    Video,
    Document,
}

/// Normalized handle to a transcribable attachment.
///
/// Created here, consumed once by the fetch step, never persisted.
#[derive(Debug, Clone)]
pub struct MediaReference {
    pub file_id: String,
    pub kind: MediaKind,
    /// Size declared by the platform. Absent for some attachments, in which
    /// case the size gate does not apply.
    pub declared_size: Option<u64>,
    pub duration: Option<u32>,
    pub mime_type: Option<String>,
}

/// Classification result for one inbound message.
#[derive(Debug, Clone)]
pub enum Inbound {
    Command(Command),
    Media(MediaReference),
    Unhandled,
}

/// Classify an inbound message.
///
/// The greeting check runs before media classification and only applies in
/// private chats; the same text in a group is not a command.
#[must_use]
pub fn classify(msg: &Message) -> Inbound {
    if msg.chat.is_private() && msg.text.as_deref() == Some(GREETING_COMMAND) {
        return Inbound::Command(Command::Start);
    }
    match locate_media(msg) {
        Some(media) => Inbound::Media(media),
        None => Inbound::Unhandled,
    }
}

/// Extract a transcribable media reference, if any.
///
/// Precedence is fixed: voice, then video note, then audio, then video,
/// then a document whose MIME type is `audio/*` or `video/*`. First match
/// wins even on malformed payloads carrying several attachments.
#[must_use]
pub fn locate_media(msg: &Message) -> Option<MediaReference> {
    if let Some(v) = &msg.voice {
        return Some(MediaReference {
            file_id: v.file_id.clone(),
            kind: MediaKind::Voice,
            declared_size: v.file_size,
            duration: v.duration,
            mime_type: v.mime_type.clone(),
        });
    }
    if let Some(v) = &msg.video_note {
        return Some(MediaReference {
            file_id: v.file_id.clone(),
            kind: MediaKind::VideoNote,
            declared_size: v.file_size,
            duration: v.duration,
            mime_type: None,
        });
    }
    if let Some(a) = &msg.audio {
        return Some(MediaReference {
            file_id: a.file_id.clone(),
            kind: MediaKind::Audio,
            declared_size: a.file_size,
            duration: a.duration,
            mime_type: a.mime_type.clone(),
        });
    }
    if let Some(v) = &msg.video {
        return Some(MediaReference {
            file_id: v.file_id.clone(),
            kind: MediaKind::Video,
            declared_size: v.file_size,
            duration: v.duration,
            mime_type: v.mime_type.clone(),
        });
    }
    if let Some(d) = &msg.document {
        let transcribable = d
            .mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("audio/") || m.starts_with("video/"));
        if transcribable {
            return Some(MediaReference {
                file_id: d.file_id.clone(),
                kind: MediaKind::Document,
                declared_size: d.file_size,
                duration: None,
                mime_type: d.mime_type.clone(),
            });
        }
    }
    None
}
