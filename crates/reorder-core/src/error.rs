#![forbid(unsafe_code)]

//! Error type for the explicit `try_*` entry points.
//!
//! Host-facing event handlers never return these; they log and leave state
//! unchanged instead.

use std::fmt;

/// Reasons a reorder operation could not be carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderError {
    /// A drag was requested on a sequence with no items.
    EmptySequence,
    /// Row height has not been measured yet (zero, negative, or not finite).
    GeometryNotReady {
        /// The row height at the time of the request.
        row_height: f32,
    },
    /// A drag start arrived while another session was still active.
    SessionActive {
        /// Index lifted by the session that is still running.
        dragging_index: usize,
    },
    /// An index fell outside the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Sequence length.
        len: usize,
    },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "cannot drag within an empty sequence"),
            Self::GeometryNotReady { row_height } => {
                write!(f, "row geometry not measured (row height {row_height})")
            }
            Self::SessionActive { dragging_index } => {
                write!(f, "drag session already active at index {dragging_index}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Result alias for reorder operations.
pub type Result<T> = std::result::Result<T, ReorderError>;
