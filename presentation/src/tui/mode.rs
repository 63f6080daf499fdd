//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: scrolling, suggestions, help, quit
//! - Insert mode: editing the query

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode (vim-like)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

impl InputMode {
    /// Mode indicator for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
        }
    }
}

/// Semantic action derived from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    EnterInsert,
    ExitToNormal,
    /// Dispatch the input buffer
    Submit,
    Quit,
    InsertChar(char),
    /// Modified Enter: a line break, never a submission
    InsertNewline,
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    ToggleHelp,
    /// Copy suggestion `n` (0-based) into the input buffer
    UseSuggestion(usize),
    None,
}

/// Map a key event to an action for the given mode
pub fn handle_key_event(mode: InputMode, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal(key),
        InputMode::Insert => handle_insert(key),
    }
}

fn handle_normal(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('i') | KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::EnterInsert,
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Submit,
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,

        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::ScrollUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::ScrollDown,
        (KeyCode::PageUp, _) => KeyAction::PageUp,
        (KeyCode::PageDown, _) => KeyAction::PageDown,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => KeyAction::ScrollToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => KeyAction::ScrollToBottom,

        (KeyCode::Char('?'), _) => KeyAction::ToggleHelp,

        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            KeyAction::UseSuggestion(c as usize - '1' as usize)
        }

        _ => KeyAction::None,
    }
}

fn handle_insert(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::ExitToNormal,
        KeyCode::Enter if key.modifiers.is_empty() => KeyAction::Submit,
        KeyCode::Enter => KeyAction::InsertNewline,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::InsertChar(c)
        }
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
    }

    #[test]
    fn test_plain_enter_submits() {
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Enter)),
            KeyAction::Submit
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Enter)),
            KeyAction::Submit
        );
    }

    #[test]
    fn test_modified_enter_does_not_submit() {
        for modifiers in [
            KeyModifiers::SHIFT,
            KeyModifiers::ALT,
            KeyModifiers::CONTROL,
            KeyModifiers::SHIFT | KeyModifiers::ALT,
        ] {
            let action = handle_key_event(InputMode::Insert, key_with(KeyCode::Enter, modifiers));
            assert_eq!(action, KeyAction::InsertNewline);
            let action = handle_key_event(InputMode::Normal, key_with(KeyCode::Enter, modifiers));
            assert_ne!(action, KeyAction::Submit);
        }
    }

    #[test]
    fn test_insert_mode_typing() {
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Char('q'))),
            KeyAction::InsertChar('q')
        );
        assert_eq!(
            handle_key_event(
                InputMode::Insert,
                key_with(KeyCode::Char('W'), KeyModifiers::SHIFT)
            ),
            KeyAction::InsertChar('W')
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Backspace)),
            KeyAction::DeleteChar
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Esc)),
            KeyAction::ExitToNormal
        );
    }

    #[test]
    fn test_normal_mode_navigation() {
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('i'))),
            KeyAction::EnterInsert
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('j'))),
            KeyAction::ScrollDown
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('k'))),
            KeyAction::ScrollUp
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('g'))),
            KeyAction::ScrollToTop
        );
        assert_eq!(
            handle_key_event(
                InputMode::Normal,
                key_with(KeyCode::Char('G'), KeyModifiers::SHIFT)
            ),
            KeyAction::ScrollToBottom
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('?'))),
            KeyAction::ToggleHelp
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_suggestion_keys() {
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('1'))),
            KeyAction::UseSuggestion(0)
        );
        assert_eq!(
            handle_key_event(InputMode::Normal, key(KeyCode::Char('3'))),
            KeyAction::UseSuggestion(2)
        );
        assert_eq!(
            handle_key_event(InputMode::Insert, key(KeyCode::Char('1'))),
            KeyAction::InsertChar('1')
        );
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(InputMode::Normal, ctrl_c), KeyAction::Quit);
        assert_eq!(handle_key_event(InputMode::Insert, ctrl_c), KeyAction::Quit);
    }
}
