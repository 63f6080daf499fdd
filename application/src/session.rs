//! Chat session state.
//!
//! A [`Session`] is the single container for everything that changes while
//! the client runs: the message log, the input buffer, and the dispatch
//! state. It is created empty at startup, owned by one event loop, and
//! dropped on exit.

use estate_domain::{Entry, MessageLog};

/// Whether a query is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    Pending,
}

impl DispatchState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Pending => "Analyzing",
        }
    }
}

/// Conversation state owned by the front end's event loop.
///
/// The log and the dispatch state change only through
/// [`DispatchQueryUseCase`](crate::use_cases::dispatch_query::DispatchQueryUseCase);
/// the input buffer is also edited directly by the user.
#[derive(Debug, Default)]
pub struct Session {
    log: MessageLog,
    input: String,
    state: DispatchState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == DispatchState::Pending
    }

    // -- Input buffer --

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Direct access for keystroke editing
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // -- Dispatcher transitions --

    /// Idle → Pending: record the user entry and clear the buffer.
    pub(crate) fn start_dispatch(&mut self, user: Entry) {
        debug_assert_eq!(self.state, DispatchState::Idle);
        self.log.append(user);
        self.input.clear();
        self.state = DispatchState::Pending;
    }

    /// Pending → Idle: record the bot entry.
    pub(crate) fn finish_dispatch(&mut self, bot: Entry) {
        debug_assert_eq!(self.state, DispatchState::Pending);
        self.log.append(bot);
        self.state = DispatchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_domain::BotReply;

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = Session::new();
        assert!(session.log().is_empty());
        assert_eq!(session.input(), "");
        assert_eq!(session.state(), DispatchState::Idle);
        assert!(!session.is_pending());
    }

    #[test]
    fn input_buffer_is_editable() {
        let mut session = Session::new();
        session.input_mut().push_str("Analyze");
        session.input_mut().push(' ');
        assert_eq!(session.input(), "Analyze ");
        session.set_input("Analyze Wakad");
        assert_eq!(session.input(), "Analyze Wakad");
    }

    #[test]
    fn dispatch_transitions_append_and_toggle_state() {
        let mut session = Session::new();
        session.set_input("Analyze Wakad");

        session.start_dispatch(Entry::user("Analyze Wakad"));
        assert!(session.is_pending());
        assert_eq!(session.input(), "");
        assert_eq!(session.log().len(), 1);

        session.finish_dispatch(Entry::bot(BotReply::new("ok")));
        assert_eq!(session.state(), DispatchState::Idle);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn state_labels() {
        assert_eq!(DispatchState::Idle.label(), "Ready");
        assert_eq!(DispatchState::Pending.label(), "Analyzing");
    }
}
