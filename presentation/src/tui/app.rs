//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop, owns TuiState + Session)     request task (tokio::spawn)
//!   ├─ crossterm EventStream                           └─ dispatcher.request(query)
//!   ├─ event_rx (TuiEvent::QueryResolved) <───────────────── event_tx
//!   └─ tick_interval
//! ```
//!
//! The session never leaves the loop: `begin` and `complete` run here, and
//! only the network call runs on the spawned task.

use super::event::TuiEvent;
use super::mode::{self, InputMode, KeyAction};
use super::state::{MAX_INPUT_LINES, TuiState};
use super::widgets::{
    MainLayout, conversation::ConversationWidget, header::HeaderWidget, help::HelpWidget,
    input::InputWidget, status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use estate_application::{DispatchOutcome, DispatchQueryUseCase};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Rows moved per mouse-wheel step
const WHEEL_ROWS: usize = 3;

/// Main TUI application
pub struct TuiApp {
    dispatcher: DispatchQueryUseCase,
    config: TuiConfig,

    // -- Channel from request tasks back to the loop --
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl TuiApp {
    pub fn new(dispatcher: DispatchQueryUseCase) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            dispatcher,
            config: TuiConfig::default(),
            event_tx,
            event_rx,
        }
    }

    pub fn with_config(mut self, config: TuiConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                DisableBracketedPaste
            );
            original_hook(info);
        }));

        let mut state = TuiState::new(self.dispatcher.endpoint());
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick);

        info!("TUI started against {}", state.endpoint);

        let result = loop {
            // Render
            let mut page_rows = state.page_rows;
            if let Err(e) = terminal.draw(|frame| {
                page_rows = Self::render(frame, &state);
            }) {
                break Err(e);
            }
            state.page_rows = page_rows;

            if state.should_quit {
                break Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Completed requests
                Some(event) = self.event_rx.recv() => {
                    self.apply_tui_event(&mut state, event);
                }

                // Tick for typing indicator and flash expiry
                _ = tick.tick() => {
                    state.on_tick(self.config.flash);
                }
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        info!(
            "TUI closed after {} entries",
            state.session.log().len()
        );
        result
    }

    /// Render all widgets; returns the visible conversation rows
    fn render(frame: &mut ratatui::Frame, state: &TuiState) -> usize {
        let layout = MainLayout::compute(
            frame.area(),
            state.input_line_count() as u16,
            MAX_INPUT_LINES,
        );

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(ConversationWidget::new(state), layout.conversation);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(HelpWidget::new(), help_area);
        }

        layout.conversation.height.saturating_sub(2) as usize
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut TuiState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // If help is showing, Esc or ? closes it
                if state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                    state.show_help = false;
                    return;
                }

                let action = mode::handle_key_event(state.mode, key);
                self.handle_action(state, action);
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll_up_by(WHEEL_ROWS),
                MouseEventKind::ScrollDown => state.scroll_down_by(WHEEL_ROWS),
                _ => {}
            },
            Event::Paste(text) => {
                for c in text.chars() {
                    state.insert_char(c);
                }
            }
            // Resize is picked up by the next draw
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Mode transitions
            KeyAction::EnterInsert => state.mode = InputMode::Insert,
            KeyAction::ExitToNormal => state.mode = InputMode::Normal,

            // Text editing
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::InsertNewline => state.insert_newline(),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),
            KeyAction::UseSuggestion(index) => {
                if state.use_suggestion(index) {
                    state.mode = InputMode::Insert;
                }
            }

            KeyAction::Submit => self.submit(state),

            // Scrolling
            KeyAction::ScrollUp => state.scroll_up(),
            KeyAction::ScrollDown => state.scroll_down(),
            KeyAction::PageUp => state.page_up(),
            KeyAction::PageDown => state.page_down(),
            KeyAction::ScrollToTop => state.scroll_to_top(),
            KeyAction::ScrollToBottom => state.scroll_to_bottom(),

            // Application
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ToggleHelp => state.show_help = !state.show_help,
        }
    }

    /// Start a dispatch and hand its request to a background task
    fn submit(&self, state: &mut TuiState) {
        let pending = match self.dispatcher.begin(&mut state.session) {
            Ok(pending) => pending,
            Err(e) if e.is_silent_rejection() => {
                debug!("Submission not dispatched: {}", e);
                return;
            }
            Err(e) => {
                state.set_flash(e.to_string());
                return;
            }
        };

        state.sync_cursor();
        state.on_log_changed();

        let query = pending.query().clone();
        state.pending = Some(pending);

        let dispatcher = self.dispatcher.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = dispatcher.request(&query).await;
            let _ = event_tx.send(TuiEvent::QueryResolved(outcome));
        });
    }

    /// Apply a TuiEvent to state
    fn apply_tui_event(&self, state: &mut TuiState, event: TuiEvent) {
        match event {
            TuiEvent::QueryResolved(outcome) => {
                let Some(pending) = state.pending.take() else {
                    warn!("Discarding a reply with no pending query");
                    return;
                };

                match self.dispatcher.complete(&mut state.session, pending, outcome) {
                    DispatchOutcome::Answered => {}
                    DispatchOutcome::ConnectivityError => {
                        state.set_flash("Could not reach the analysis service");
                    }
                }
                state.on_log_changed();
            }
        }
    }
}
