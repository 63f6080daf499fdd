//! Conversation domain.
//!
//! - [`entry::Entry`] — a user query or a bot reply
//! - [`log::MessageLog`] — the append-only, ordered conversation history

pub mod entry;
pub mod log;
