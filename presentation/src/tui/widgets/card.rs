//! Bot reply card — summary, metrics, chart and data table
//!
//! A card is measured first ([`BotCard::height`]) and then drawn through a
//! window of its rows ([`BotCard::render_window`]). Only the visible rows
//! are ever drawn, so a card with thousands of table rows scrolls like a
//! short one.

use crate::output::console::{display_cell, format_number};
use estate_domain::util::group_thousands;
use estate_domain::{BotReply, EntryKind, TableView, Visualization};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row,
        Table, Widget, Wrap,
    },
};

/// Plot height of a trend chart, axes included
const TREND_HEIGHT: usize = 12;
/// Gap between table columns
const COLUMN_SPACING: u16 = 1;

const PRIMARY_COLOR: Color = Color::Cyan;
const SECONDARY_COLOR: Color = Color::Magenta;

pub struct BotCard<'a> {
    reply: &'a BotReply,
    visualization: Option<Visualization>,
    table: Option<TableView>,
}

impl<'a> BotCard<'a> {
    pub fn new(reply: &'a BotReply) -> Self {
        Self {
            reply,
            visualization: Visualization::select(reply),
            table: TableView::from_reply(reply),
        }
    }

    /// Rows needed to draw the card at `width`
    pub fn height(&self, width: u16) -> usize {
        let inner = width.saturating_sub(2);
        let mut height = self.summary_paragraph().line_count(inner).saturating_add(2);

        if let Some(metrics) = self.metrics_paragraph() {
            height = height.saturating_add(1 + metrics.line_count(inner));
        }
        if let Some(viz) = &self.visualization {
            height = height.saturating_add(chart_height(viz).saturating_add(2));
        }
        if let Some(table) = &self.table {
            height = height.saturating_add(table_height(table).saturating_add(2));
        }
        height
    }

    /// Draw card rows `skip..skip + area.height` into `area`.
    pub fn render_window(self, skip: usize, area: Rect, buf: &mut Buffer) {
        let height = self.height(area.width);

        let mut borders = Borders::LEFT | Borders::RIGHT;
        let mut block = Block::default().border_style(Style::default().fg(Color::Green));
        if skip == 0 {
            borders |= Borders::TOP;
            block = block.title(format!(" {} ", EntryKind::Bot.label()));
        }
        if skip.saturating_add(area.height as usize) >= height {
            borders |= Borders::BOTTOM;
        }
        let block = block.borders(borders);
        let inner = block.inner(area);
        block.render(area, buf);

        // Content row 0 sits below the top border
        let mut sections = Sections::new(inner, skip.saturating_sub(1));

        let summary = self.summary_paragraph();
        let rows = summary.line_count(inner.width);
        if let Some(slice) = sections.take(rows) {
            render_paragraph(summary, slice, buf);
        }

        if let Some(metrics) = self.metrics_paragraph() {
            sections.skip(1);
            let rows = metrics.line_count(inner.width);
            if let Some(slice) = sections.take(rows) {
                render_paragraph(metrics, slice, buf);
            }
        }

        if let Some(viz) = &self.visualization {
            sections.skip(1);
            if let Some(slice) = sections.take(1) {
                Paragraph::new(section_title(viz.title())).render(slice.area, buf);
            }
            if let Some(slice) = sections.take(chart_height(viz)) {
                render_chart(viz, slice, buf);
            }
        }

        if let Some(table) = &self.table {
            sections.skip(1);
            if let Some(slice) = sections.take(1) {
                Paragraph::new(section_title("Detailed Data")).render(slice.area, buf);
            }
            if let Some(slice) = sections.take(table_height(table)) {
                render_table(table, slice, buf);
            }
        }
    }

    fn summary_paragraph(&self) -> Paragraph<'a> {
        let mut lines = vec![section_title("Analysis Summary")];
        lines.extend(self.reply.summary().lines().map(Line::from));
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false })
    }

    fn metrics_paragraph(&self) -> Option<Paragraph<'a>> {
        if self.reply.metrics().is_empty() {
            return None;
        }

        let mut spans = Vec::new();
        for (i, metric) in self.reply.metrics().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("{}: ", metric.label),
                Style::default().fg(Color::Gray),
            ));
            spans.push(Span::styled(
                metric.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Some(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }))
    }
}

impl Widget for BotCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_window(0, area, buf);
    }
}

/// Paragraph scroll offset for `rows` hidden rows
pub(super) fn scroll_rows(rows: usize) -> u16 {
    rows.min(u16::MAX as usize) as u16
}

/// The on-screen part of one section
struct Slice {
    area: Rect,
    /// Section rows hidden above `area`
    offset: usize,
}

/// Lays sections out top to bottom in content rows and clips each one to
/// the visible window.
struct Sections {
    area: Rect,
    /// Content rows above the window
    hidden: usize,
    y: usize,
}

impl Sections {
    fn new(area: Rect, hidden: usize) -> Self {
        Self { area, hidden, y: 0 }
    }

    /// Visible part of the next `rows` content rows, if any
    fn take(&mut self, rows: usize) -> Option<Slice> {
        let start = self.y;
        let end = start.saturating_add(rows);
        self.y = end;

        let window_end = self.hidden.saturating_add(self.area.height as usize);
        let top = start.max(self.hidden);
        let bottom = end.min(window_end);
        if top >= bottom {
            return None;
        }

        Some(Slice {
            area: Rect::new(
                self.area.x,
                self.area.y + (top - self.hidden) as u16,
                self.area.width,
                (bottom - top) as u16,
            ),
            offset: top - start,
        })
    }

    fn skip(&mut self, rows: usize) {
        self.y = self.y.saturating_add(rows);
    }
}

fn section_title(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_paragraph(paragraph: Paragraph<'_>, slice: Slice, buf: &mut Buffer) {
    paragraph
        .scroll((scroll_rows(slice.offset), 0))
        .render(slice.area, buf);
}

fn chart_height(viz: &Visualization) -> usize {
    match viz {
        Visualization::Comparison { bars } => bars.len(),
        Visualization::Trend { .. } => TREND_HEIGHT,
    }
}

fn table_height(table: &TableView) -> usize {
    table.len().saturating_add(1)
}

fn render_chart(viz: &Visualization, slice: Slice, buf: &mut Buffer) {
    match viz {
        Visualization::Comparison { bars } => {
            let magnitude = |value: f64| value.max(0.0).round() as u64;
            // Scale against every bar, not just the visible ones
            let max = bars.iter().map(|b| magnitude(b.value)).max().unwrap_or(0);

            let visible: Vec<Bar> = bars
                .iter()
                .skip(slice.offset)
                .take(slice.area.height as usize)
                .map(|bar| {
                    Bar::default()
                        .value(magnitude(bar.value))
                        .label(Line::from(bar.label.as_str()))
                        .text_value(group_thousands(&format_number(bar.value)))
                })
                .collect();

            BarChart::default()
                .direction(Direction::Horizontal)
                .bar_width(1)
                .bar_gap(0)
                .max(max.max(1))
                .bar_style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::Black).bg(Color::Green))
                .data(BarGroup::default().bars(&visible))
                .render(slice.area, buf);
        }
        Visualization::Trend { points } => {
            let lines = viz.lines();
            let colors = [PRIMARY_COLOR, SECONDARY_COLOR];
            let datasets: Vec<Dataset> = lines
                .iter()
                .zip(colors)
                .map(|(line, color)| {
                    let graph_type = if line.points.len() > 1 {
                        GraphType::Line
                    } else {
                        GraphType::Scatter
                    };
                    Dataset::default()
                        .name(line.name)
                        .marker(Marker::Braille)
                        .graph_type(graph_type)
                        .style(Style::default().fg(color))
                        .data(&line.points)
                })
                .collect();

            let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
            let mut x_labels: Vec<Line> = Vec::new();
            if let Some(first) = points.first() {
                x_labels.push(Line::from(first.period.as_str()));
            }
            if points.len() > 2 {
                x_labels.push(Line::from(points[points.len() / 2].period.as_str()));
            }
            if let Some(last) = points.last().filter(|_| points.len() > 1) {
                x_labels.push(Line::from(last.period.as_str()));
            }

            let (y_min, y_max) = y_bounds(viz.value_range());
            let y_labels = vec![
                Line::from(group_thousands(&format_number(y_min))),
                Line::from(group_thousands(&format_number(y_max))),
            ];

            let chart = Chart::new(datasets)
                .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
                .x_axis(
                    Axis::default()
                        .bounds([0.0, x_max])
                        .labels(x_labels)
                        .style(Style::default().fg(Color::DarkGray)),
                )
                .y_axis(
                    Axis::default()
                        .bounds([y_min, y_max])
                        .labels(y_labels)
                        .style(Style::default().fg(Color::DarkGray)),
                );
            render_clipped(chart, TREND_HEIGHT as u16, slice, buf);
        }
    }
}

/// Draw a fixed-height widget whole, then copy the rows inside `slice`
fn render_clipped(widget: impl Widget, height: u16, slice: Slice, buf: &mut Buffer) {
    let full = Rect::new(0, 0, slice.area.width, height);
    let mut scratch = Buffer::empty(full);
    widget.render(full, &mut scratch);

    for row in 0..slice.area.height {
        let source = slice.offset as u16 + row;
        if source >= full.height {
            break;
        }
        for x in 0..full.width {
            buf[(slice.area.x + x, slice.area.y + row)] = scratch[(x, source)].clone();
        }
    }
}

/// Axis bounds from zero (or the lowest value) to the highest value
fn y_bounds(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((min, max)) => {
            let low = min.min(0.0);
            let high = if max > low { max } else { low + 1.0 };
            (low, high)
        }
        None => (0.0, 1.0),
    }
}

/// Header at section row 0, record `n` at row `n + 1`
fn render_table(table: &TableView, slice: Slice, buf: &mut Buffer) {
    let shown = table.map_cells(display_cell);
    let widths = shown.column_widths();

    let natural: usize = widths.iter().sum::<usize>()
        + COLUMN_SPACING as usize * widths.len().saturating_sub(1);
    let constraints: Vec<Constraint> = if natural <= slice.area.width as usize {
        widths.iter().map(|w| Constraint::Length(*w as u16)).collect()
    } else {
        widths
            .iter()
            .map(|w| Constraint::Fill((*w).min(u16::MAX as usize) as u16))
            .collect()
    };

    let with_header = slice.offset == 0;
    let first = slice.offset.saturating_sub(1);
    let body_rows = slice.area.height as usize - usize::from(with_header);

    let rows = shown
        .rows()
        .iter()
        .skip(first)
        .take(body_rows)
        .map(|row| Row::new(row.iter().map(String::as_str)));

    let mut widget = Table::new(rows, constraints).column_spacing(COLUMN_SPACING);
    if with_header {
        widget = widget.header(
            Row::new(table.headers())
                .style(Style::default().bold().fg(Color::Yellow))
                .bottom_margin(0),
        );
    }
    widget.render(slice.area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_domain::RawPayload;
    use serde_json::json;

    fn reply(value: serde_json::Value) -> BotReply {
        RawPayload::new(value).normalize()
    }

    fn render(reply: &BotReply, width: u16) -> (Buffer, usize) {
        let card = BotCard::new(reply);
        let height = card.height(width);
        let area = Rect::new(0, 0, width, height as u16);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        (buf, height)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    fn contents(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_summary_only_card() {
        let reply = reply(json!({"summary": "Wakad shows rising demand"}));
        let (buf, height) = render(&reply, 60);
        // border + heading + summary + border
        assert_eq!(height, 4);
        let text = contents(&buf);
        assert!(text.contains("Analyst"));
        assert!(text.contains("Analysis Summary"));
        assert!(text.contains("Wakad shows rising demand"));
        assert!(!text.contains("Detailed Data"));
    }

    #[test]
    fn test_comparison_card_has_one_row_per_bar() {
        let reply = reply(json!({
            "summary": "s",
            "chartType": "bar",
            "chartData": [{"label": "X", "value": 10}, {"label": "Y", "value": 20}]
        }));
        let (buf, height) = render(&reply, 60);
        // 4 + blank + title + two bars
        assert_eq!(height, 8);
        let text = contents(&buf);
        assert!(text.contains("Comparison Chart"));
        assert!(row_text(&buf, 5).contains('X'));
        assert!(row_text(&buf, 6).contains('Y'));
    }

    #[test]
    fn test_trend_card_draws_legend() {
        let reply = reply(json!({
            "summary": "s",
            "chartData": [
                {"year": 2020, "totalSales": 100, "flatRate": 50},
                {"year": 2021, "totalSales": 150, "flatRate": 55}
            ]
        }));
        let (buf, height) = render(&reply, 70);
        assert_eq!(height, 4 + 2 + TREND_HEIGHT);
        let text = contents(&buf);
        assert!(text.contains("Trend Analysis"));
        assert!(text.contains("Total Sales"));
        assert!(text.contains("Flat Rate"));
        assert!(text.contains("2020"));
        assert!(text.contains("2021"));
    }

    #[test]
    fn test_table_section_lists_rows() {
        let reply = reply(json!({
            "summary": "s",
            "tableData": [
                {"year": 2020, "final_location": "Akurdi", "total_units": 1200},
                {"year": 2021, "final_location": "Akurdi"}
            ]
        }));
        let (buf, height) = render(&reply, 120);
        assert_eq!(height, 4 + 2 + 3);
        let text = contents(&buf);
        assert!(text.contains("Detailed Data"));
        assert!(text.contains("Year"));
        assert!(text.contains("1,200"));
        assert_eq!(text.matches("Akurdi").count(), 2);
    }

    #[test]
    fn test_metrics_strip() {
        let reply = reply(json!({
            "summary": "s",
            "metrics": {"Total Sales": "₹2.50 Cr", "Total Units": "1,234"}
        }));
        let (buf, height) = render(&reply, 80);
        assert_eq!(height, 6);
        let text = contents(&buf);
        assert!(text.contains("Total Sales: "));
        assert!(text.contains("1,234"));
    }

    fn locations(count: usize) -> BotReply {
        let rows: Vec<serde_json::Value> = (0..count)
            .map(|i| json!({"final_location": format!("Loc{i}")}))
            .collect();
        reply(json!({"summary": "s", "tableData": rows}))
    }

    fn render_rows(reply: &BotReply, width: u16, skip: usize, rows: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, rows);
        let mut buf = Buffer::empty(area);
        BotCard::new(reply).render_window(skip, area, &mut buf);
        (0..rows).map(|y| row_text(&buf, y)).collect()
    }

    #[test]
    fn test_height_of_huge_table_does_not_wrap() {
        let reply = locations(70_000);
        // 4 + blank + title + header + rows
        assert_eq!(BotCard::new(&reply).height(100), 4 + 2 + 1 + 70_000);
    }

    #[test]
    fn test_window_in_the_middle_of_a_table() {
        let reply = locations(1000);
        // Row 0 border, 1-2 summary, 3 blank, 4 title, 5 header, 6 = Loc0
        let screen = render_rows(&reply, 100, 6 + 500, 3);
        assert!(screen[0].contains("Loc500"));
        assert!(screen[2].contains("Loc502"));
        assert!(!screen.join("\n").contains("Year"));
        assert!(screen.iter().all(|row| row.starts_with('│')));
    }

    #[test]
    fn test_window_at_the_bottom_closes_the_card() {
        let reply = locations(1000);
        let height = BotCard::new(&reply).height(100);
        let screen = render_rows(&reply, 100, height - 2, 2);
        assert!(screen[0].contains("Loc999"));
        assert!(screen[1].starts_with('└'));
    }

    #[test]
    fn test_window_clips_the_trend_chart() {
        let reply = reply(json!({
            "summary": "s",
            "chartData": [
                {"year": 2020, "totalSales": 100, "flatRate": 50},
                {"year": 2021, "totalSales": 150, "flatRate": 55}
            ]
        }));
        let (full, height) = render(&reply, 70);
        // The last three rows of the chart and the bottom border
        let screen = render_rows(&reply, 70, height - 4, 4);
        for (i, row) in screen.iter().enumerate() {
            assert_eq!(*row, row_text(&full, (height - 4 + i) as u16));
        }
    }

    #[test]
    fn test_y_bounds() {
        assert_eq!(y_bounds(None), (0.0, 1.0));
        assert_eq!(y_bounds(Some((10.0, 20.0))), (0.0, 20.0));
        assert_eq!(y_bounds(Some((-5.0, 20.0))), (-5.0, 20.0));
        assert_eq!(y_bounds(Some((0.0, 0.0))), (0.0, 1.0));
    }
}
