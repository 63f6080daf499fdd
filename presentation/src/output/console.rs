//! Console output formatter for conversation entries

use colored::Colorize;
use estate_application::HealthReport;
use estate_domain::util::{ellipsize, group_thousands};
use estate_domain::{
    BotReply, Entry, EntryKind, TABLE_COLUMNS, TableView, TrendPoint, Visualization,
};

/// Widest bar drawn for a comparison chart
const BAR_WIDTH: usize = 40;
/// Widest label column of a comparison chart
const LABEL_WIDTH: usize = 24;
/// Widest table cell
const CELL_WIDTH: usize = 20;

/// Formats entries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn off ANSI colors for everything formatted afterwards
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format one log entry
    pub fn format_entry(entry: &Entry) -> String {
        match entry {
            Entry::User { text } => format!(
                "{} {}\n",
                format!("{}:", EntryKind::User.label()).cyan().bold(),
                text
            ),
            Entry::Bot(reply) => Self::format_reply(reply),
        }
    }

    /// Format a bot reply: summary, metrics, chart, table
    pub fn format_reply(reply: &BotReply) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(EntryKind::Bot.label()));
        output.push_str(&format!("\n{}\n", "Analysis Summary".cyan().bold()));
        output.push_str(reply.summary());
        output.push('\n');

        if !reply.metrics().is_empty() {
            output.push('\n');
            for metric in reply.metrics() {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("{}:", metric.label).dimmed(),
                    metric.value.bold()
                ));
            }
        }

        if let Some(viz) = Visualization::select(reply) {
            output.push_str(&Self::section_header(viz.title()));
            output.push_str(&Self::format_visualization(&viz));
        }

        if let Some(table) = TableView::from_reply(reply) {
            output.push_str(&Self::section_header("Detailed Data"));
            output.push_str(&Self::format_table(&table));
        }

        output
    }

    /// Format the entry as pretty JSON
    pub fn format_json(entry: &Entry) -> String {
        serde_json::to_string_pretty(entry).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a health report
    pub fn format_health(endpoint: &str, report: &HealthReport) -> String {
        let status = if report.is_healthy() {
            report.status.green().bold()
        } else {
            report.status.yellow().bold()
        };

        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Endpoint:".cyan().bold(), endpoint));
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));
        if !report.message.is_empty() {
            output.push_str(&format!("{} {}\n", "Message:".cyan().bold(), report.message));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Data loaded:".cyan().bold(),
            if report.data_loaded { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Records:".cyan().bold(),
            group_thousands(&report.total_records.to_string())
        ));
        if !report.sample_locations.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Locations:".cyan().bold(),
                report.sample_locations.join(", ")
            ));
        }
        output
    }

    fn format_visualization(viz: &Visualization) -> String {
        match viz {
            Visualization::Comparison { bars } => {
                let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
                let label_width = bars
                    .iter()
                    .map(|b| b.label.chars().count())
                    .max()
                    .unwrap_or(0)
                    .min(LABEL_WIDTH);

                bars.iter()
                    .map(|bar| {
                        let len = if max > 0.0 {
                            ((bar.value.max(0.0) / max) * BAR_WIDTH as f64).round() as usize
                        } else {
                            0
                        };
                        format!(
                            "  {:<width$}  {} {}\n",
                            ellipsize(&bar.label, label_width),
                            "█".repeat(len).green(),
                            group_thousands(&format_number(bar.value)),
                            width = label_width
                        )
                    })
                    .collect()
            }
            Visualization::Trend { points } => Self::format_trend(points),
        }
    }

    fn format_trend(points: &[TrendPoint]) -> String {
        let cell = |v: Option<f64>| {
            v.map(|v| group_thousands(&format_number(v)))
                .unwrap_or_default()
        };
        let rows: Vec<[String; 3]> = points
            .iter()
            .map(|p| [p.period.clone(), cell(p.primary), cell(p.secondary)])
            .collect();
        let headers = [
            "Year",
            Visualization::PRIMARY_NAME,
            Visualization::SECONDARY_NAME,
        ];
        Self::aligned(&headers, &rows)
    }

    fn format_table(table: &TableView) -> String {
        let shown = table.map_cells(|i, cell| ellipsize(&display_cell(i, cell), CELL_WIDTH));
        Self::aligned(&shown.headers(), shown.rows())
    }

    /// Left-aligned columns separated by two spaces
    fn aligned<R: AsRef<[String]>>(headers: &[&str], rows: &[R]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.as_ref()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: Vec<String>| -> String {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<w$}", c, w = *w))
                .collect::<Vec<_>>()
                .join("  ");
            format!("  {}\n", line.trim_end())
        };

        let mut output = render(headers.iter().map(|h| h.to_string()).collect())
            .bold()
            .to_string();
        for row in rows {
            output.push_str(&render(row.as_ref().to_vec()));
        }
        output
    }

    fn header(title: &str) -> String {
        format!("{}", format!("── {} ──", title).yellow().bold())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }
}

/// Whole numbers print without a fractional part; others keep two decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Numeric table cells get thousands separators, except the year column.
pub fn display_cell(column: usize, cell: &str) -> String {
    if TABLE_COLUMNS[column].field == "year" {
        cell.to_string()
    } else {
        group_thousands(cell)
    }
}
