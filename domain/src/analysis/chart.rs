//! Chart kind value object

use serde::{Deserialize, Serialize};

/// How a reply's series should be charted.
///
/// The server declares this with a free-form `chartType` string. Only the
/// categorical marker is recognised; every other value, including an
/// absent one, means a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One bar per labeled point
    Categorical,
    /// Lines plotted against a period axis (default)
    #[default]
    TimeSeries,
}

impl ChartKind {
    /// The `chartType` value that selects a categorical comparison.
    pub const CATEGORICAL_MARKER: &'static str = "bar";

    /// Resolve the server's `chartType` marker.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(Self::CATEGORICAL_MARKER) => Self::Categorical,
            _ => Self::TimeSeries,
        }
    }

    /// Section heading shown above the chart.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Categorical => "Comparison Chart",
            Self::TimeSeries => "Trend Analysis",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Categorical => write!(f, "categorical"),
            Self::TimeSeries => write!(f, "time-series"),
        }
    }
}
