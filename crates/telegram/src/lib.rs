//! Minimal Telegram Bot API client for hearsay.
//!
//! Covers exactly the surface the relay needs: decoding webhook update
//! payloads, classifying media attachments, sending replies and typing
//! indicators, and resolving/downloading files from the Telegram CDN.

pub mod classify;
pub mod client;
pub mod error;
pub mod types;

pub use {
    classify::{Command, Inbound, MediaKind, MediaReference, classify, locate_media},
    client::TelegramClient,
    error::{Error, Result},
    types::{Chat, ChatKind, Message, Update},
};
