#![forbid(unsafe_code)]

//! Pointer Y to list index.
//!
//! `index = floor((scroll_offset + y - container_top) / row_height)`, clamped
//! to `[0, len - 1]`. Pointers above the first row map to `0` and pointers
//! below the last row map to `len - 1`; mapping never fails for a non-empty
//! list with measured rows.
//!
//! # Unmeasured geometry
//!
//! Before the first row layout the row height is zero. [`try_index_for_y`]
//! reports that as `None`, which the controller uses to refuse a drag start
//! and to skip ticks. [`index_for_y`] is total and maps it to index `0`.
//! An empty list behaves the same way in both functions.

use crate::geometry::GeometryTracker;

/// Map a pointer Y to a list index, or `None` if the list is empty or the
/// row height is not usable.
#[must_use]
pub fn try_index_for_y(geometry: &GeometryTracker, y: f32, len: usize) -> Option<usize> {
    if len == 0 || !geometry.is_ready() {
        return None;
    }
    let rows = (f64::from(geometry.content_y(y)) / f64::from(geometry.row_height())).floor();
    let last = len - 1;
    // NaN pointer coordinates land on the first row.
    if rows.is_nan() || rows <= 0.0 {
        return Some(0);
    }
    if rows >= last as f64 {
        return Some(last);
    }
    Some(rows as usize)
}

/// Map a pointer Y to a list index.
///
/// Total: returns `0` when [`try_index_for_y`] would return `None`.
#[inline]
#[must_use]
pub fn index_for_y(geometry: &GeometryTracker, y: f32, len: usize) -> usize {
    try_index_for_y(geometry, y, len).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of_50() -> GeometryTracker {
        GeometryTracker::with_layout(0.0, 0.0, 50.0)
    }

    #[test]
    fn maps_rows_by_floor() {
        let g = rows_of_50();
        assert_eq!(index_for_y(&g, 0.0, 5), 0);
        assert_eq!(index_for_y(&g, 49.9, 5), 0);
        assert_eq!(index_for_y(&g, 50.0, 5), 1);
        assert_eq!(index_for_y(&g, 149.0, 5), 2);
    }

    #[test]
    fn clamps_below_and_above() {
        let g = rows_of_50();
        assert_eq!(index_for_y(&g, -500.0, 5), 0);
        assert_eq!(index_for_y(&g, 260.0, 5), 4);
        assert_eq!(index_for_y(&g, 1.0e9, 5), 4);
    }

    #[test]
    fn scroll_offset_shifts_rows_up() {
        let g = GeometryTracker::with_layout(100.0, 0.0, 50.0);
        // Two rows scrolled away: the top of the viewport is row 2.
        assert_eq!(index_for_y(&g, 0.0, 10), 2);
        assert_eq!(index_for_y(&g, 60.0, 10), 3);
    }

    #[test]
    fn container_top_shifts_rows_down() {
        let g = GeometryTracker::with_layout(0.0, 80.0, 50.0);
        assert_eq!(index_for_y(&g, 80.0, 5), 0);
        assert_eq!(index_for_y(&g, 79.0, 5), 0);
        assert_eq!(index_for_y(&g, 130.0, 5), 1);
    }

    #[test]
    fn unmeasured_row_height_maps_to_none_or_zero() {
        let g = GeometryTracker::new();
        assert_eq!(try_index_for_y(&g, 260.0, 5), None);
        assert_eq!(index_for_y(&g, 260.0, 5), 0);
    }

    #[test]
    fn empty_list_maps_to_none() {
        let g = rows_of_50();
        assert_eq!(try_index_for_y(&g, 10.0, 0), None);
        assert_eq!(index_for_y(&g, 10.0, 0), 0);
    }

    #[test]
    fn nan_pointer_maps_to_first_row() {
        let g = rows_of_50();
        assert_eq!(try_index_for_y(&g, f32::NAN, 5), Some(0));
    }

    #[test]
    fn single_row_always_zero() {
        let g = rows_of_50();
        for y in [-10.0, 0.0, 25.0, 75.0, 10_000.0] {
            assert_eq!(index_for_y(&g, y, 1), 0);
        }
    }
}
