//! Raw analysis payloads and their normalization into [`BotReply`].
//!
//! The analysis service answers with a loosely-typed JSON document. Every
//! field is optional and may have the wrong shape. [`RawPayload`] carries
//! that document untouched; [`RawPayload::normalize`] is the single place
//! where it is turned into the typed domain model.
//!
//! # Field mapping
//!
//! | payload field | reply field   | fallback          |
//! |---------------|---------------|-------------------|
//! | `summary`     | `summary`     | `""`              |
//! | `chartData`   | `series`      | empty             |
//! | `chartType`   | `chart_kind`  | `TimeSeries`      |
//! | `tableData`   | `rows`        | empty             |
//! | `metrics`     | `metrics`     | empty             |
//!
//! # Examples
//!
//! ```
//! use estate_domain::analysis::payload::RawPayload;
//! use estate_domain::ChartKind;
//!
//! let payload = RawPayload::new(serde_json::json!({
//!     "summary": "Wakad shows rising demand",
//!     "chartType": "bar",
//! }));
//! let reply = payload.normalize();
//! assert_eq!(reply.summary(), "Wakad shows rising demand");
//! assert_eq!(reply.chart_kind(), ChartKind::Categorical);
//! assert!(!reply.has_chart());
//! ```

use super::chart::ChartKind;
use super::record::{Record, display_value};
use crate::conversation::entry::{BotReply, Metric};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUMMARY_FIELD: &str = "summary";
pub const CHART_DATA_FIELD: &str = "chartData";
pub const CHART_TYPE_FIELD: &str = "chartType";
pub const TABLE_DATA_FIELD: &str = "tableData";
pub const METRICS_FIELD: &str = "metrics";

/// An analysis response exactly as it came off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(Value);

impl RawPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(name))
    }

    /// Convert the payload into a well-formed reply.
    ///
    /// Total: any JSON value, including non-objects, produces a reply.
    pub fn normalize(&self) -> BotReply {
        let summary = self
            .field(SUMMARY_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default();

        let chart_kind =
            ChartKind::from_marker(self.field(CHART_TYPE_FIELD).and_then(Value::as_str));

        BotReply::new(summary)
            .with_series(records(self.field(CHART_DATA_FIELD)))
            .with_chart_kind(chart_kind)
            .with_rows(records(self.field(TABLE_DATA_FIELD)))
            .with_metrics(metrics(self.field(METRICS_FIELD)))
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn records(value: Option<&Value>) -> Vec<Record> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().map(Record::from_value).collect(),
        _ => Vec::new(),
    }
}

fn metrics(value: Option<&Value>) -> Vec<Metric> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(label, value)| display_value(value).map(|v| Metric::new(label, v)))
            .collect(),
        _ => Vec::new(),
    }
}
