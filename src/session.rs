//! Session-scoped state shared across page views.
//!
//! The only cross-view state in the system is the one-time promotional
//! prompt: it may be offered at most once per browsing session. Instead of
//! an ambient storage flag, the session is an explicit [`SessionContext`]
//! value that the caller owns and passes to the views that need it.

/// Lifecycle of the one-time promotional prompt within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    /// The prompt has not been offered yet this session.
    #[default]
    Unset,
    /// The prompt was offered; it will not be offered again this session.
    ShownThisSession,
}

/// Per-session context, created once at session start and threaded through
/// the views that gate on it.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    prompt: PromptState,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the promotional prompt may still be offered this session.
    pub fn prompt_pending(&self) -> bool {
        self.prompt == PromptState::Unset
    }

    /// Record that the prompt was offered. Idempotent.
    pub fn mark_prompt_shown(&mut self) {
        self.prompt = PromptState::ShownThisSession;
    }
}
