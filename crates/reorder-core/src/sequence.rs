#![forbid(unsafe_code)]

//! Order-preserving single-element relocation.
//!
//! Moving `from -> to` lifts the element at `from`, shifts every element
//! between the two positions one slot toward `from`, and drops the lifted
//! element at `to`. It is not a swap: the elements in between keep their
//! relative order. Cost is `O(|from - to|)`.
//!
//! ```
//! use reorder_core::sequence::move_element;
//!
//! let mut items = [0, 1, 2, 3, 4];
//! move_element(&mut items, 1, 3);
//! assert_eq!(items, [0, 2, 3, 1, 4]);
//! ```

use crate::error::{ReorderError, Result};

/// Relocate the element at `from` to `to`, in place.
///
/// Out-of-range indices are clamped to the last element; an empty slice is
/// left untouched. Returns the same slice for chaining.
pub fn move_element<T>(items: &mut [T], from: usize, to: usize) -> &mut [T] {
    let Some(last) = items.len().checked_sub(1) else {
        return items;
    };
    relocate(items, from.min(last), to.min(last));
    items
}

/// Relocate the element at `from` to `to`, rejecting out-of-range indices.
pub fn try_move_element<T>(items: &mut [T], from: usize, to: usize) -> Result<()> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ReorderError::IndexOutOfBounds { index, len });
        }
    }
    relocate(items, from, to);
    Ok(())
}

#[inline]
fn relocate<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}
