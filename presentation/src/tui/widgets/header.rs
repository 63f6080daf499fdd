//! Header widget — shows dispatch state and endpoint

use crate::tui::state::TuiState;
use estate_application::DispatchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dispatch = self.state.session.state();
        let state_color = match dispatch {
            DispatchState::Idle => Color::Green,
            DispatchState::Pending => Color::Yellow,
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(state_color)),
            Span::styled(
                dispatch.label(),
                Style::default()
                    .fg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                self.state.endpoint.as_str(),
                Style::default().fg(Color::White),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Real Estate Analyst ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
