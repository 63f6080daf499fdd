//! Status bar widget — mode indicator + key hints + flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if self.state.session.is_pending() {
            return "Waiting for analysis…  j/k:scroll  Ctrl+C:quit";
        }
        match self.state.mode {
            InputMode::Normal => "i:insert  1-3:suggest  j/k:scroll  ?:help  q:quit",
            InputMode::Insert => "Enter:send  Shift+Enter:newline  Esc:normal",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(Span::styled(format!(" {} ", mode.indicator()), mode_style));
        let mode_width = mode_line.width() as u16;

        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Flash message or key hints, right-aligned
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.as_str(),
            None => self.hints(),
        };
        let right_line = Line::from(Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));
        let right_width = right_line.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        (0..80).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_mode_and_hints() {
        let mut state = TuiState::default();
        let line = draw(&state);
        assert!(line.starts_with(" NORMAL "));
        assert!(line.contains("i:insert"));

        state.mode = InputMode::Insert;
        let line = draw(&state);
        assert!(line.starts_with(" INSERT "));
        assert!(line.contains("Enter:send"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::default();
        state.set_flash("Could not reach the analysis service");
        let line = draw(&state);
        assert!(line.contains("Could not reach the analysis service"));
        assert!(!line.contains("i:insert"));
    }
}
