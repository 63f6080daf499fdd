//! Input widget — query input area with mode-aware prompt
//!
//! Supports multiline input: text is split on `\n` and rendered as
//! multiple `Line`s inside a `Paragraph`. The prompt prefix is shown
//! only on the first line; continuation lines get a "  " indent.

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const CONTINUATION: &str = "  ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.state.session.input();
        let pending = self.state.session.is_pending();
        let active = self.state.mode == InputMode::Insert && !pending;
        let color = if active { Color::Green } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Ask ")
            .style(Style::default().fg(color));

        let prompt_span = Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        if pending {
            let line = Line::from(vec![
                prompt_span,
                Span::styled(
                    "Waiting for the analyst…",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]);
            Paragraph::new(line).block(block).render(area, buf);
            return;
        }

        let lines = if active {
            build_active_lines(text, self.state.cursor_pos, color, &prompt_span)
        } else if text.is_empty() {
            vec![Line::from(vec![
                prompt_span,
                Span::styled(
                    "Press i to ask about a locality",
                    Style::default().fg(Color::DarkGray),
                ),
            ])]
        } else {
            build_inactive_lines(text, color, &prompt_span)
        };

        // Scroll so the cursor line is visible
        let inner_height = area.height.saturating_sub(2) as usize;
        let cursor_line = find_cursor_line(text, self.state.cursor_pos);
        let scroll_offset = if lines.len() > inner_height && cursor_line >= inner_height {
            (cursor_line + 1).saturating_sub(inner_height)
        } else {
            0
        };

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll_offset as u16, 0))
            .render(area, buf);
    }
}

/// Build lines for Insert mode with cursor rendering
fn build_active_lines<'a>(
    text: &str,
    cursor_pos: usize,
    color: Color,
    prompt_span: &Span<'a>,
) -> Vec<Line<'a>> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    let mut lines = Vec::new();
    let mut byte_offset = 0;

    for (i, line_text) in text.split('\n').enumerate() {
        let line_start = byte_offset;
        let line_end = line_start + line_text.len();

        let mut spans: Vec<Span<'a>> = vec![prefix(i, color, prompt_span)];

        if cursor_pos >= line_start && cursor_pos <= line_end {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            spans.push(Span::raw(before.to_string()));

            match after.chars().next() {
                // Cursor at end of line: block cursor on a space
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    let ch_len = ch.len_utf8();
                    spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
                    if ch_len < after.len() {
                        spans.push(Span::raw(after[ch_len..].to_string()));
                    }
                }
            }
        } else {
            spans.push(Span::raw(line_text.to_string()));
        }

        lines.push(Line::from(spans));
        byte_offset = line_end + 1; // '\n'
    }

    lines
}

/// Build lines for Normal mode — no cursor
fn build_inactive_lines<'a>(text: &str, color: Color, prompt_span: &Span<'a>) -> Vec<Line<'a>> {
    text.split('\n')
        .enumerate()
        .map(|(i, line_text)| {
            Line::from(vec![
                prefix(i, color, prompt_span),
                Span::styled(line_text.to_string(), Style::default().fg(color)),
            ])
        })
        .collect()
}

fn prefix<'a>(line_index: usize, color: Color, prompt_span: &Span<'a>) -> Span<'a> {
    if line_index == 0 {
        prompt_span.clone()
    } else {
        Span::styled(
            CONTINUATION,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }
}

/// Find which line (0-indexed) the cursor is on
fn find_cursor_line(text: &str, cursor_pos: usize) -> usize {
    text[..cursor_pos.min(text.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(state: &TuiState, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, 40, height);
        let mut buf = Buffer::empty(area);
        InputWidget::new(state).render(area, &mut buf);
        (0..height)
            .map(|y| (0..40).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_multiline_input_gets_continuation_indent() {
        let mut state = TuiState::default();
        state.mode = InputMode::Insert;
        state.session.set_input("Compare Aundh\nand Wakad");
        state.cursor_end();

        let rows = draw(&state, 4);
        assert!(rows[1].contains("> Compare Aundh"));
        assert!(rows[2].starts_with("│  and Wakad"));
    }

    #[test]
    fn test_placeholder_in_normal_mode() {
        let state = TuiState::default();
        let rows = draw(&state, 3);
        assert!(rows[1].contains("Press i"));
    }

    #[test]
    fn test_find_cursor_line() {
        assert_eq!(find_cursor_line("ab\ncd", 1), 0);
        assert_eq!(find_cursor_line("ab\ncd", 3), 1);
        assert_eq!(find_cursor_line("ab\ncd", 99), 1);
    }

    #[test]
    fn test_cursor_in_middle_of_multibyte_text() {
        let lines = build_active_lines("₹5", 0, Color::Green, &Span::raw(PROMPT));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[2].content, "₹");
        assert_eq!(lines[0].spans[3].content, "5");
    }
}
