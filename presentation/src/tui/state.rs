//! TUI application state
//!
//! Single source of truth for everything the TUI renders.
//! The conversation itself lives in the [`Session`]; this struct adds the
//! view state around it (mode, cursor, scroll position, overlays).

use super::mode::InputMode;
use estate_application::{PendingQuery, Session};
use std::time::{Duration, Instant};

/// Prompts offered on the empty conversation screen
pub const SUGGESTIONS: [&str; 3] = [
    "Analyze Wakad",
    "Show price growth for Akurdi",
    "Compare demand trends of Aundh and Ambegaon Budruk",
];

/// Tallest the input box grows, in text lines
pub const MAX_INPUT_LINES: u16 = 6;

/// Central TUI state, owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: InputMode,

    // -- Conversation --
    pub session: Session,
    /// Ticket for the request in flight, if any
    pub pending: Option<PendingQuery>,
    /// Byte offset into the session's input buffer
    pub cursor_pos: usize,

    // -- Scroll (offset counts rows up from the bottom) --
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    /// Visible conversation rows at the last draw
    pub page_rows: usize,

    // -- Display --
    pub endpoint: String,
    /// Advances once per tick; drives the typing indicator
    pub tick: u64,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            session: Session::new(),
            pending: None,
            cursor_pos: 0,
            scroll_offset: 0,
            auto_scroll: true,
            page_rows: 10,
            endpoint: String::new(),
            tick: 0,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Whether keystrokes may change the input buffer
    pub fn input_enabled(&self) -> bool {
        !self.session.is_pending()
    }

    // -- Input editing (no-ops while a query is pending) --

    pub fn insert_char(&mut self, c: char) {
        if !self.input_enabled() {
            return;
        }
        let cursor = self.cursor_pos;
        self.session.input_mut().insert(cursor, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Insert a newline at the current cursor position
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        if !self.input_enabled() || self.cursor_pos == 0 {
            return;
        }
        let cursor = self.cursor_pos;
        let input = self.session.input_mut();
        let prev_char_len = input[..cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        input.remove(cursor - prev_char_len);
        self.cursor_pos -= prev_char_len;
    }

    pub fn cursor_left(&mut self) {
        let prev_char_len = self.session.input()[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos -= prev_char_len;
    }

    pub fn cursor_right(&mut self) {
        let next_char_len = self.session.input()[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.session.input().len();
    }

    /// Number of lines in the input buffer
    pub fn input_line_count(&self) -> usize {
        let input = self.session.input();
        input.lines().count().max(1) + if input.ends_with('\n') { 1 } else { 0 }
    }

    /// Copy suggestion `index` into the input buffer. Nothing is submitted.
    pub fn use_suggestion(&mut self, index: usize) -> bool {
        let Some(text) = SUGGESTIONS.get(index) else {
            return false;
        };
        if !self.input_enabled() {
            return false;
        }
        self.session.set_input(*text);
        self.cursor_end();
        true
    }

    /// Keep the cursor valid after the dispatcher cleared the buffer
    pub fn sync_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.session.input().len());
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.scroll_up_by(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_down_by(1);
    }

    pub fn scroll_up_by(&mut self, rows: usize) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
    }

    pub fn scroll_down_by(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        if self.scroll_offset == 0 {
            self.auto_scroll = true;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_up_by(self.page_rows.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down_by(self.page_rows.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = usize::MAX; // Clamped during render
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    /// Follow the newest entry unless the user scrolled away
    pub fn on_log_changed(&mut self) {
        if self.auto_scroll {
            self.scroll_offset = 0;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    pub fn on_tick(&mut self, flash_age: Duration) {
        self.tick = self.tick.wrapping_add(1);
        self.expire_flash(flash_age);
    }
}
