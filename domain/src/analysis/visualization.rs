//! Visualization selection
//!
//! Decides, per bot reply, which chart to draw and binds the series fields
//! to its axes. This is the only place that branches on [`ChartKind`].

use super::chart::ChartKind;
use super::record::Record;
use crate::conversation::entry::BotReply;

/// Point field holding the category name of a comparison bar
pub const LABEL_FIELD: &str = "label";
/// Point field holding the magnitude of a comparison bar
pub const VALUE_FIELD: &str = "value";
/// Point field holding the period of a trend point
pub const PERIOD_FIELD: &str = "year";
/// Point field plotted as the primary trend line
pub const PRIMARY_FIELD: &str = "totalSales";
/// Point field plotted as the secondary trend line
pub const SECONDARY_FIELD: &str = "flatRate";

/// One bar of a comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// One period on a trend chart. Either metric may be missing for a period.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub period: String,
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
}

/// A plotted line of a trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub name: &'static str,
    /// `(period index, value)` pairs; periods without a value are skipped.
    pub points: Vec<(f64, f64)>,
}

/// Rendering instructions derived from a reply
#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    /// Discrete comparison, one bar per point, single series
    Comparison { bars: Vec<Bar> },
    /// Two lines sharing one period axis
    Trend { points: Vec<TrendPoint> },
}

impl Visualization {
    pub const PRIMARY_NAME: &'static str = "Total Sales";
    pub const SECONDARY_NAME: &'static str = "Flat Rate";

    /// Pick the rendering for a reply. `None` when the series is empty,
    /// whatever the declared chart kind.
    pub fn select(reply: &BotReply) -> Option<Self> {
        if reply.series().is_empty() {
            return None;
        }

        Some(match reply.chart_kind() {
            ChartKind::Categorical => Self::Comparison {
                bars: reply.series().iter().map(bar).collect(),
            },
            ChartKind::TimeSeries => Self::Trend {
                points: reply.series().iter().map(trend_point).collect(),
            },
        })
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Comparison { .. } => ChartKind::Categorical,
            Self::Trend { .. } => ChartKind::TimeSeries,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Number of bars or periods
    pub fn len(&self) -> usize {
        match self {
            Self::Comparison { bars } => bars.len(),
            Self::Trend { points } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The plotted lines of a trend; empty for a comparison.
    pub fn lines(&self) -> Vec<TrendLine> {
        match self {
            Self::Comparison { .. } => Vec::new(),
            Self::Trend { points } => vec![
                TrendLine {
                    name: Self::PRIMARY_NAME,
                    points: line(points, |p| p.primary),
                },
                TrendLine {
                    name: Self::SECONDARY_NAME,
                    points: line(points, |p| p.secondary),
                },
            ],
        }
    }

    /// Smallest and largest plotted magnitude, for axis bounds.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let values: Vec<f64> = match self {
            Self::Comparison { bars } => bars.iter().map(|b| b.value).collect(),
            Self::Trend { points } => points
                .iter()
                .flat_map(|p| [p.primary, p.secondary])
                .flatten()
                .collect(),
        };
        let min = values.iter().copied().reduce(f64::min)?;
        let max = values.iter().copied().reduce(f64::max)?;
        Some((min, max))
    }
}

fn bar(point: &Record) -> Bar {
    Bar {
        label: point.cell(LABEL_FIELD),
        value: point.number(VALUE_FIELD).unwrap_or(0.0),
    }
}

fn trend_point(point: &Record) -> TrendPoint {
    TrendPoint {
        period: point.cell(PERIOD_FIELD),
        primary: point.number(PRIMARY_FIELD),
        secondary: point.number(SECONDARY_FIELD),
    }
}

fn line(points: &[TrendPoint], metric: impl Fn(&TrendPoint) -> Option<f64>) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| metric(p).map(|v| (i as f64, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::payload::RawPayload;
    use serde_json::json;

    fn reply(value: serde_json::Value) -> BotReply {
        RawPayload::new(value).normalize()
    }

    #[test]
    fn empty_series_renders_no_chart() {
        assert!(Visualization::select(&reply(json!({"chartType": "bar"}))).is_none());
        assert!(Visualization::select(&reply(json!({"chartData": []}))).is_none());
    }

    #[test]
    fn categorical_binds_label_and_value() {
        let r = reply(json!({
            "chartType": "bar",
            "chartData": [{"label": "X", "value": 10}, {"label": "Y", "value": 20}]
        }));
        let viz = Visualization::select(&r).unwrap();
        assert_eq!(viz.kind(), ChartKind::Categorical);
        assert_eq!(viz.title(), "Comparison Chart");
        assert_eq!(
            viz,
            Visualization::Comparison {
                bars: vec![
                    Bar { label: "X".into(), value: 10.0 },
                    Bar { label: "Y".into(), value: 20.0 },
                ]
            }
        );
        assert!(viz.lines().is_empty());
        assert_eq!(viz.value_range(), Some((10.0, 20.0)));
    }

    #[test]
    fn categorical_tolerates_missing_fields() {
        let r = reply(json!({"chartType": "bar", "chartData": [{"value": "n/a"}, {}]}));
        let Some(Visualization::Comparison { bars }) = Visualization::select(&r) else {
            panic!("expected comparison");
        };
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], Bar { label: String::new(), value: 0.0 });
    }

    #[test]
    fn time_series_binds_two_lines_on_one_axis() {
        let r = reply(json!({
            "chartData": [
                {"year": 2020, "totalSales": 100, "flatRate": 50},
                {"year": 2021, "totalSales": 150, "flatRate": 55}
            ]
        }));
        let viz = Visualization::select(&r).unwrap();
        assert_eq!(viz.kind(), ChartKind::TimeSeries);
        assert_eq!(viz.title(), "Trend Analysis");
        assert_eq!(viz.len(), 2);

        let lines = viz.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Total Sales");
        assert_eq!(lines[0].points, vec![(0.0, 100.0), (1.0, 150.0)]);
        assert_eq!(lines[1].name, "Flat Rate");
        assert_eq!(lines[1].points, vec![(0.0, 50.0), (1.0, 55.0)]);

        let Visualization::Trend { points } = viz else {
            panic!("expected trend");
        };
        assert_eq!(points[0].period, "2020");
        assert_eq!(points[1].period, "2021");
    }

    #[test]
    fn time_series_skips_missing_values_per_line() {
        let r = reply(json!({
            "chartType": "line",
            "chartData": [
                {"year": 2019, "totalSales": 10},
                {"year": 2020, "flatRate": 5},
                {"totalSales": 30, "flatRate": 7}
            ]
        }));
        let viz = Visualization::select(&r).unwrap();
        let lines = viz.lines();
        assert_eq!(lines[0].points, vec![(0.0, 10.0), (2.0, 30.0)]);
        assert_eq!(lines[1].points, vec![(1.0, 5.0), (2.0, 7.0)]);
        assert_eq!(viz.value_range(), Some((5.0, 30.0)));
    }

    #[test]
    fn value_range_is_none_without_numbers() {
        let r = reply(json!({"chartData": [{"year": 2020}]}));
        let viz = Visualization::select(&r).unwrap();
        assert_eq!(viz.value_range(), None);
    }
}
