//! Loosely-typed records carried by a bot reply.
//!
//! Both chart points and table rows arrive as arbitrary JSON objects. They
//! are kept verbatim; the accessors here are the only place that interprets
//! individual fields, and every accessor tolerates a missing or odd field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One chart point or table row, exactly as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from any JSON value. Non-objects become an empty record
    /// so that sequence length is preserved.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric view of a field. Numeric strings are accepted; anything else is `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Display text of a field; `None` when absent or null.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(display_value)
    }

    /// Display text of a field, empty when absent.
    pub fn cell(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a scalar JSON value the way a person would read it.
///
/// Whole floats drop their fractional part (`2020.0` → `2020`), matching how
/// the backend's float columns are meant to be read.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_float(f),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value)
    }

    #[test]
    fn non_object_becomes_empty_record() {
        assert!(record(json!(42)).fields().is_empty());
        assert!(record(json!(null)).fields().is_empty());
        assert!(record(json!(["a"])).fields().is_empty());
    }

    #[test]
    fn number_accepts_numbers_and_numeric_strings() {
        let r = record(json!({"a": 10, "b": 2.5, "c": "7.25", "d": "n/a", "e": null}));
        assert_eq!(r.number("a"), Some(10.0));
        assert_eq!(r.number("b"), Some(2.5));
        assert_eq!(r.number("c"), Some(7.25));
        assert_eq!(r.number("d"), None);
        assert_eq!(r.number("e"), None);
        assert_eq!(r.number("missing"), None);
    }

    #[test]
    fn text_formats_scalars() {
        let r = record(json!({
            "year": 2020,
            "rate": 5234.5,
            "whole": 1200.0,
            "area": "Wakad",
            "flag": true,
            "nothing": null
        }));
        assert_eq!(r.text("year").as_deref(), Some("2020"));
        assert_eq!(r.text("rate").as_deref(), Some("5234.5"));
        assert_eq!(r.text("whole").as_deref(), Some("1200"));
        assert_eq!(r.text("area").as_deref(), Some("Wakad"));
        assert_eq!(r.text("flag").as_deref(), Some("true"));
        assert_eq!(r.text("nothing"), None);
        assert_eq!(r.cell("missing"), "");
    }
}
