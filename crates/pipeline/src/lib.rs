//! Message-to-transcript pipeline for hearsay.
//!
//! Orchestrates one webhook update at a time: classify, gate on declared
//! size, signal "typing", fetch the media, transcribe it, and send exactly
//! one reply (or none). Stateless across invocations.

pub mod pipeline;
pub mod reply;

pub use {
    pipeline::{MAX_MEDIA_BYTES, Pipeline},
    reply::Outcome,
};
