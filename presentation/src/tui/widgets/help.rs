//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
#[derive(Default)]
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let key = |keys: &'static str, action: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<12}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(action),
            ])
        };

        vec![
            heading("Normal Mode"),
            key("i / a", "Start typing a question"),
            key("Enter", "Send the current input"),
            key("1 2 3", "Use a suggested question"),
            key("j/k ↑/↓", "Scroll one line"),
            key("PgUp/PgDn", "Scroll one page"),
            key("g / G", "Scroll to top / bottom"),
            key("?", "Toggle this help"),
            key("q", "Quit"),
            Line::from(""),
            heading("Insert Mode"),
            key("Enter", "Send the question"),
            key("Shift+Enter", "New line"),
            key("Esc", "Back to Normal mode"),
            Line::from(""),
            key("Ctrl+C", "Quit from any mode"),
            Line::from(""),
            Line::from(Span::styled(
                "Input is locked while an analysis is running.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
