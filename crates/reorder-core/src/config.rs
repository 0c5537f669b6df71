#![forbid(unsafe_code)]

//! Controller configuration.

use crate::responder::ResponderPolicy;

/// What to do with a drag start that arrives while a session is active.
///
/// Hosts are expected never to overlap sessions; this decides the outcome
/// when one does anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPolicy {
    /// Keep the running session and drop the new start (default).
    #[default]
    IgnoreNewStart,
    /// Finish the running session as cancelled, then start a new one.
    RestartSession,
}

/// Configuration for a [`DragController`](crate::DragController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderConfig {
    /// Overlapping-start handling (default: [`SessionPolicy::IgnoreNewStart`]).
    pub session_policy: SessionPolicy,
    /// Touch-stream negotiation for the drag handle
    /// (default: [`ResponderPolicy::exclusive`]).
    pub responder: ResponderPolicy,
    /// Whether the list surface must stop scrolling during a drag
    /// (default: true).
    pub disable_scroll_while_dragging: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            session_policy: SessionPolicy::default(),
            responder: ResponderPolicy::default(),
            disable_scroll_while_dragging: true,
        }
    }
}

impl ReorderConfig {
    /// Set the overlapping-start policy.
    #[must_use]
    pub fn with_session_policy(mut self, policy: SessionPolicy) -> Self {
        self.session_policy = policy;
        self
    }

    /// Set the responder policy.
    #[must_use]
    pub fn with_responder(mut self, responder: ResponderPolicy) -> Self {
        self.responder = responder;
        self
    }

    /// Keep the list scrollable while dragging.
    #[must_use]
    pub fn scroll_while_dragging(mut self) -> Self {
        self.disable_scroll_while_dragging = false;
        self
    }
}
