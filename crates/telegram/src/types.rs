//! Serde schema for the slice of the Bot API the relay reads.
//!
//! Media payloads are independent `Option` fields rather than one tagged
//! enum: Telegram documents a message as carrying at most one, but nothing
//! stops a malformed payload from carrying several, and classification must
//! stay deterministic in that case (see [`crate::classify`]).

use serde::Deserialize;

/// One webhook invocation's payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub channel_post: Option<Message>,
}

impl Update {
    /// The message carried by this update, whether a direct message or a
    /// channel post.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref().or(self.channel_post.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<Voice>,
    #[serde(default)]
    pub video_note: Option<VideoNote>,
    #[serde(default)]
    pub audio: Option<Audio>,
    #[serde(default)]
    pub video: Option<Video>,
    #[serde(default)]
    pub document: Option<Document>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
}

impl Chat {
    /// One-to-one chat with the bot.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.kind == ChatKind::Private
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Voice note (OGG Opus).
#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub file_id: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Round video message.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoNote {
    pub file_id: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// Audio file (music, podcast episodes).
#[derive(Debug, Clone, Deserialize)]
pub struct Audio {
    pub file_id: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub file_id: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Generic file attachment; only audio/video documents are transcribable.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub file_id: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn update_prefers_message_over_channel_post() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 7,
            "message": {
                "message_id": 1,
                "chat": { "id": 42, "type": "private" },
                "text": "hi"
            }
        }))
        .unwrap();
        assert_eq!(update.message().unwrap().message_id, 1);
    }

    #[test]
    fn channel_post_is_read_when_no_message() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 8,
            "channel_post": {
                "message_id": 9,
                "chat": { "id": -100123, "type": "channel" },
                "voice": { "file_id": "vf", "duration": 3 }
            }
        }))
        .unwrap();
        let msg = update.message().unwrap();
        assert_eq!(msg.chat.kind, ChatKind::Channel);
        assert!(!msg.chat.is_private());
        assert_eq!(msg.voice.as_ref().unwrap().file_id, "vf");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 9,
            "message": {
                "message_id": 2,
                "date": 1700000000,
                "from": { "id": 1001, "is_bot": false, "first_name": "Alice" },
                "chat": { "id": 42, "type": "private", "first_name": "Alice" },
                "sticker": { "file_id": "st", "width": 512, "height": 512 }
            }
        }))
        .expect("stickers and extra fields must not break decoding");
        let msg = update.message().unwrap();
        assert!(msg.voice.is_none());
        assert!(msg.document.is_none());
    }
}
