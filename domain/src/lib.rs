//! Domain layer for estate-chat
//!
//! This crate contains the conversation model and the analysis result types.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A [`MessageLog`] holds user queries and bot replies in the order they
//! happened. Entries are never edited or removed.
//!
//! ## Analysis
//!
//! The analysis service answers with a loosely-typed JSON document
//! ([`RawPayload`]). Normalizing it yields a [`BotReply`], from which the
//! presentation layer derives a [`Visualization`] and a [`TableView`].

pub mod analysis;
pub mod conversation;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    chart::ChartKind,
    payload::RawPayload,
    record::Record,
    table::{TABLE_COLUMNS, TableColumn, TableView},
    visualization::{Bar, TrendLine, TrendPoint, Visualization},
};
pub use conversation::{
    entry::{BotReply, CONNECTIVITY_ERROR_SUMMARY, Entry, EntryKind, Metric},
    log::MessageLog,
};
pub use core::{error::DomainError, query::Query};
