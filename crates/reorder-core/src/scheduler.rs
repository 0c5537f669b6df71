#![forbid(unsafe_code)]

//! Frame scheduling for the re-evaluation loop.
//!
//! The controller re-derives its target index once per animation frame while
//! a drag is active. Instead of a closure that re-arms itself, the loop is a
//! cancellable repeating task:
//!
//! 1. [`FrameLoop::start`] opens a new generation and issues a [`FrameToken`].
//! 2. The controller hands the token to a [`FrameScheduler`], which arranges
//!    for the host to call back with it on the next frame.
//! 3. On callback, [`FrameLoop::accept`] checks the token. A token from an
//!    older generation, or one that was already consumed, is stale.
//! 4. While running, [`FrameLoop::reschedule`] issues the next token.
//!
//! [`FrameLoop::cancel`] ends the generation. At most one token is
//! outstanding per generation, so after cancellation at most one callback can
//! still arrive, and it is rejected as stale.
//!
//! [`ManualScheduler`] queues tokens instead of talking to a host, which makes
//! the loop fully deterministic in tests and headless hosts.

use std::collections::VecDeque;

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken {
    generation: u64,
    seq: u64,
}

impl FrameToken {
    /// Loop generation this token belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of this token within its generation (0 for the first frame).
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Host-side frame source.
///
/// Implementations arrange for `DragController::on_frame(token)` to be called
/// on the next animation frame. They never call back synchronously from
/// inside `request_frame`.
pub trait FrameScheduler {
    /// Request one callback carrying `token`.
    fn request_frame(&mut self, token: FrameToken);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self, token: FrameToken) {
        (**self).request_frame(token);
    }
}

/// Cancellable repeating frame task.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    generation: u64,
    next_seq: u64,
    running: bool,
    pending: Option<FrameToken>,
}

impl FrameLoop {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            next_seq: 0,
            running: false,
            pending: None,
        }
    }

    /// Start a new generation and issue its first token.
    ///
    /// Returns `None` if the loop is already running; the outstanding token
    /// keeps driving it.
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.running {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.next_seq = 0;
        self.running = true;
        Some(self.issue())
    }

    /// Stop the loop. Any outstanding token becomes stale.
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            self.pending = None;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Consume `token` if it is the outstanding token of a running loop.
    ///
    /// Returns `false` for stale tokens, which callers must treat as no-ops.
    pub fn accept(&mut self, token: FrameToken) -> bool {
        if self.running && self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Issue the next token after an accepted frame, if still running and
    /// nothing is outstanding.
    pub fn reschedule(&mut self) -> Option<FrameToken> {
        if !self.running || self.pending.is_some() {
            return None;
        }
        Some(self.issue())
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The token the loop is waiting on, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn issue(&mut self) -> FrameToken {
        let token = FrameToken {
            generation: self.generation,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(token);
        token
    }
}

/// Scheduler that queues requested tokens for explicit delivery.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    queue: VecDeque<FrameToken>,
    requested: u64,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest queued token.
    pub fn take_next(&mut self) -> Option<FrameToken> {
        self.queue.pop_front()
    }

    /// Number of queued, undelivered tokens.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Total tokens ever requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Queue a token directly, e.g. to replay a late callback.
    pub fn push(&mut self, token: FrameToken) {
        self.queue.push_back(token);
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, token: FrameToken) {
        self.requested += 1;
        self.queue.push_back(token);
    }
}
