//! Conversation entries (Entity)

use crate::analysis::chart::ChartKind;
use crate::analysis::record::Record;
use serde::{Deserialize, Serialize};

/// Summary shown when the analysis service could not be reached.
pub const CONNECTIVITY_ERROR_SUMMARY: &str =
    "Error connecting to backend. Make sure the analysis server is reachable.";

/// Who produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    User,
    Bot,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Analyst",
        }
    }
}

/// One headline figure from the reply's `metrics` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The typed content of a bot entry.
///
/// Built once (by the normalizer or as the connectivity-error reply) and
/// never modified afterwards; fields are only readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    summary: String,
    series: Vec<Record>,
    chart_kind: ChartKind,
    rows: Vec<Record>,
    metrics: Vec<Metric>,
}

impl BotReply {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// The fixed reply appended when a request fails in transport.
    pub fn connectivity_error() -> Self {
        Self::new(CONNECTIVITY_ERROR_SUMMARY)
    }

    pub fn with_series(mut self, series: Vec<Record>) -> Self {
        self.series = series;
        self
    }

    pub fn with_chart_kind(mut self, chart_kind: ChartKind) -> Self {
        self.chart_kind = chart_kind;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Record>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn series(&self) -> &[Record] {
        &self.series
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn has_chart(&self) -> bool {
        !self.series.is_empty()
    }

    pub fn has_table(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// One item in the message log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    /// The verbatim text the user submitted
    User { text: String },
    /// The analysis service's reply (or the connectivity-error reply)
    Bot(BotReply),
}

impl Entry {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User { text: text.into() }
    }

    pub fn bot(reply: BotReply) -> Self {
        Self::Bot(reply)
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::User { .. } => EntryKind::User,
            Self::Bot(_) => EntryKind::Bot,
        }
    }

    /// User text, if this is a user entry
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::User { text } => Some(text),
            Self::Bot(_) => None,
        }
    }

    /// Bot reply, if this is a bot entry
    pub fn reply(&self) -> Option<&BotReply> {
        match self {
            Self::Bot(reply) => Some(reply),
            Self::User { .. } => None,
        }
    }
}
