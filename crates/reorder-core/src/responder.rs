#![forbid(unsafe_code)]

//! Gesture-capture contract for the drag handle.
//!
//! Scrolling the list and dragging a row are mutually exclusive on the same
//! surface. The handle's recognizer therefore claims the touch stream as soon
//! as it can, keeps it for the whole session, and keeps the host's native
//! responder out. Hosts read these flags when wiring their gesture system.

use bitflags::bitflags;

bitflags! {
    /// How the drag-handle recognizer negotiates for the touch stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResponderPolicy: u8 {
        /// Become responder when a touch starts on the handle.
        const CLAIM_ON_START = 0b0000_0001;
        /// Become responder in the capture phase of a touch start.
        const CAPTURE_ON_START = 0b0000_0010;
        /// Become responder when a touch moves over the handle.
        const CLAIM_ON_MOVE = 0b0000_0100;
        /// Become responder in the capture phase of a touch move.
        const CAPTURE_ON_MOVE = 0b0000_1000;
        /// Refuse requests from other recognizers to take over.
        const REFUSE_TERMINATION = 0b0001_0000;
        /// Prevent native components from becoming responder.
        const BLOCK_NATIVE = 0b0010_0000;

        /// Claim in both phases of start and move.
        const CLAIM_ALL = Self::CLAIM_ON_START.bits()
            | Self::CAPTURE_ON_START.bits()
            | Self::CLAIM_ON_MOVE.bits()
            | Self::CAPTURE_ON_MOVE.bits();
    }
}

impl Default for ResponderPolicy {
    fn default() -> Self {
        Self::exclusive()
    }
}

impl ResponderPolicy {
    /// Claim everywhere, never yield, block the native responder.
    #[must_use]
    pub const fn exclusive() -> Self {
        Self::CLAIM_ALL
            .union(Self::REFUSE_TERMINATION)
            .union(Self::BLOCK_NATIVE)
    }

    /// Answer for a competing recognizer asking to take over.
    #[must_use]
    pub const fn allows_termination(&self) -> bool {
        !self.contains(Self::REFUSE_TERMINATION)
    }

    /// Answer for whether the handle wants the touch at gesture start.
    #[must_use]
    pub const fn claims_start(&self) -> bool {
        self.intersects(Self::CLAIM_ON_START.union(Self::CAPTURE_ON_START))
    }

    /// Answer for whether the handle wants the touch on a move.
    #[must_use]
    pub const fn claims_move(&self) -> bool {
        self.intersects(Self::CLAIM_ON_MOVE.union(Self::CAPTURE_ON_MOVE))
    }

    #[must_use]
    pub const fn blocks_native(&self) -> bool {
        self.contains(Self::BLOCK_NATIVE)
    }
}
