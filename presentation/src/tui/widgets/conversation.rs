//! Conversation widget — message log, typing indicator, empty state
//!
//! Entries are laid out top to bottom, each measured at the pane width.
//! Only entries that intersect the visible window are drawn, and each one
//! draws just its rows inside the window. A tall card scrolls past the top
//! or bottom edge row by row.

use super::card::{BotCard, scroll_rows};
use crate::tui::state::{SUGGESTIONS, TuiState};
use estate_domain::{Entry, EntryKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Blank rows between entries
const ENTRY_GAP: usize = 1;

pub struct ConversationWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn views(&self) -> Vec<EntryView<'a>> {
        let mut views: Vec<EntryView<'a>> = self
            .state
            .session
            .log()
            .iter()
            .map(|entry| match entry {
                Entry::User { text } => EntryView::User(text),
                Entry::Bot(reply) => EntryView::Bot(BotCard::new(reply)),
            })
            .collect();

        if self.state.session.is_pending() {
            views.push(EntryView::Typing(self.state.tick));
        }
        views
    }
}

impl Widget for ConversationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let views = self.views();
        if views.is_empty() {
            EmptyState.render(inner, buf);
            return;
        }

        // Layout: (top row, height) of each view in content coordinates
        let mut placed = Vec::with_capacity(views.len());
        let mut total = 0usize;
        for (i, view) in views.iter().enumerate() {
            if i > 0 {
                total += ENTRY_GAP;
            }
            let height = view.height(inner.width);
            placed.push((total, height));
            total += height;
        }

        // scroll_offset = 0 shows the bottom
        let visible = inner.height as usize;
        let max_scroll = total.saturating_sub(visible);
        let offset = self.state.scroll_offset.min(max_scroll);
        let window_top = max_scroll - offset;
        let window_bottom = window_top + visible;

        for (view, (top, height)) in views.into_iter().zip(placed) {
            let start = top.max(window_top);
            let end = (top + height).min(window_bottom);
            if start >= end {
                continue;
            }
            let area = Rect::new(
                inner.x,
                inner.y + (start - window_top) as u16,
                inner.width,
                (end - start) as u16,
            );
            view.render_window(start - top, area, buf);
        }
    }
}

/// One drawable item of the conversation pane
enum EntryView<'a> {
    User(&'a str),
    Bot(BotCard<'a>),
    /// Three-dot indicator shown while a query is pending
    Typing(u64),
}

impl EntryView<'_> {
    fn height(&self, width: u16) -> usize {
        match self {
            Self::User(text) => user_paragraph(text).line_count(width),
            Self::Bot(card) => card.height(width),
            Self::Typing(_) => 1,
        }
    }

    /// Draw rows `skip..skip + area.height` of the view
    fn render_window(self, skip: usize, area: Rect, buf: &mut Buffer) {
        match self {
            Self::User(text) => user_paragraph(text)
                .scroll((scroll_rows(skip), 0))
                .render(area, buf),
            Self::Bot(card) => card.render_window(skip, area, buf),
            Self::Typing(tick) => Paragraph::new(typing_line(tick)).render(area, buf),
        }
    }
}

/// User entries sit on the right, label above the text
fn user_paragraph(text: &str) -> Paragraph<'_> {
    let mut lines = vec![Line::from(Span::styled(
        EntryKind::User.label(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(text.split('\n').map(Line::from));

    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: false })
}

fn typing_line(tick: u64) -> Line<'static> {
    let lit = (tick % 3) as usize;
    let mut spans = vec![Span::styled(
        format!("{} ", EntryKind::Bot.label()),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    for i in 0..3 {
        let color = if i == lit {
            Color::Green
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled("● ", Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Welcome text with the suggested prompts
struct EmptyState;

impl Widget for EmptyState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Real Estate Analysis",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Ask about prices, demand and trends by locality",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", i + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*suggestion),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press 1-3 to use a suggestion, i to type your own",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let height = (paragraph.line_count(area.width) as u16).min(area.height);
        let top = area.y + (area.height - height) / 2;
        paragraph.render(Rect::new(area.x, top, area.width, height), buf);
    }
}
