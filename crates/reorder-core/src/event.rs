#![forbid(unsafe_code)]

//! Inbound events from the presentation layer.
//!
//! Two independent streams reach the controller:
//!
//! - [`PointerEvent`]: the drag-handle gesture lifecycle. A well-formed
//!   session is one `DragStart`, zero or more `DragMove`, then exactly one
//!   of `DragEnd` or `DragCancel`.
//! - [`LayoutEvent`]: layout and scroll notifications from the list surface,
//!   delivered at unspecified frequency and possibly stale.
//!
//! Coordinates are raw vertical screen positions in the host's units.

/// Pointer lifecycle for the drag handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on a drag handle at `y`.
    DragStart { y: f32 },
    /// Pointer moved to `y` while pressed.
    DragMove { y: f32 },
    /// Pointer released.
    DragEnd,
    /// Gesture pre-empted by another recognizer or the host.
    DragCancel,
}

impl PointerEvent {
    /// Pointer coordinate carried by the event, if any.
    #[must_use]
    pub const fn y(&self) -> Option<f32> {
        match self {
            Self::DragStart { y } | Self::DragMove { y } => Some(*y),
            Self::DragEnd | Self::DragCancel => None,
        }
    }

    /// Whether the event finishes a session.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::DragEnd | Self::DragCancel)
    }
}

/// Layout and scroll notifications from the list surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutEvent {
    /// The list content scrolled to `offset_y`.
    Scroll { offset_y: f32 },
    /// The list viewport was laid out with its top at `top_y`.
    ContainerLayout { top_y: f32 },
    /// A row was laid out with `height`.
    RowLayout { height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_y_only_on_positional_events() {
        assert_eq!(PointerEvent::DragStart { y: 10.0 }.y(), Some(10.0));
        assert_eq!(PointerEvent::DragMove { y: 260.0 }.y(), Some(260.0));
        assert_eq!(PointerEvent::DragEnd.y(), None);
        assert_eq!(PointerEvent::DragCancel.y(), None);
    }

    #[test]
    fn end_and_cancel_are_terminal() {
        assert!(PointerEvent::DragEnd.is_terminal());
        assert!(PointerEvent::DragCancel.is_terminal());
        assert!(!PointerEvent::DragStart { y: 0.0 }.is_terminal());
        assert!(!PointerEvent::DragMove { y: 0.0 }.is_terminal());
    }
}
