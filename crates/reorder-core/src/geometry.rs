#![forbid(unsafe_code)]

//! Layout bookkeeping for the list surface.
//!
//! The list surface reports three facts asynchronously: how far the list has
//! scrolled, where the list viewport sits inside its parent, and how tall a
//! row is. [`GeometryTracker`] stores the latest value of each without
//! validation; consumers decide what to do with unmeasured values through
//! [`GeometryTracker::is_ready`].

/// Latest known layout facts for a uniformly sized vertical list.
///
/// All values share the pointer's coordinate space (host points or pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryTracker {
    /// Vertical distance already scrolled.
    scroll_offset: f32,
    /// Top of the list viewport relative to its ancestor.
    container_top: f32,
    /// Height of every row. Zero until the first row layout arrives.
    row_height: f32,
}

impl GeometryTracker {
    /// Create a tracker with nothing measured yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll_offset: 0.0,
            container_top: 0.0,
            row_height: 0.0,
        }
    }

    /// Create a tracker with all three facts known up front.
    #[must_use]
    pub const fn with_layout(scroll_offset: f32, container_top: f32, row_height: f32) -> Self {
        Self {
            scroll_offset,
            container_top,
            row_height,
        }
    }

    #[inline]
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    #[inline]
    pub fn set_container_top(&mut self, top: f32) {
        self.container_top = top;
    }

    #[inline]
    pub fn set_row_height(&mut self, height: f32) {
        self.row_height = height;
    }

    #[inline]
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[inline]
    #[must_use]
    pub const fn container_top(&self) -> f32 {
        self.container_top
    }

    #[inline]
    #[must_use]
    pub const fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Whether the row height has been measured to a usable value.
    ///
    /// Offsets are allowed to be anything finite; only the row height gates
    /// index mapping since it is the divisor.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.row_height.is_finite()
            && self.row_height > 0.0
            && self.scroll_offset.is_finite()
            && self.container_top.is_finite()
    }

    /// Convert a raw pointer Y into content space (scrolled, relative to the
    /// list's first row).
    #[inline]
    #[must_use]
    pub fn content_y(&self, y: f32) -> f32 {
        self.scroll_offset + y - self.container_top
    }
}
