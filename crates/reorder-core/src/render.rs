#![forbid(unsafe_code)]

//! Outbound render state.
//!
//! The list surface draws from a [`RenderState`]:
//!
//! - the list body from `sequence`, with the row at `dragging_index` hidden
//!   from normal flow ([`RenderState::rows`]);
//! - a floating copy of the lifted row that tracks the raw pointer Y while
//!   `dragging` is true ([`RenderState::overlay`]).
//!
//! `revision` increases every time the controller publishes, so a host can
//! skip redraws when it has not moved.

/// Snapshot of what the list surface should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState<'a, T> {
    /// Whether a drag session is active.
    pub dragging: bool,
    /// The lifted row, `None` when idle.
    pub dragging_index: Option<usize>,
    /// Current order of the items.
    pub sequence: &'a [T],
    /// Latest pointer sample; the overlay's top edge.
    pub pointer_y: f32,
    /// Publish counter.
    pub revision: u64,
}

impl<'a, T> RenderState<'a, T> {
    /// Lifted index in the host's integer convention: `-1` when idle.
    #[must_use]
    pub fn dragging_idx(&self) -> isize {
        self.dragging_index
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Whether the row at `index` is hidden from the list body.
    #[must_use]
    pub fn row_hidden(&self, index: usize) -> bool {
        self.dragging && self.dragging_index == Some(index)
    }

    /// Floating overlay for the lifted row, `None` when idle.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay<'a, T>> {
        if !self.dragging {
            return None;
        }
        let index = self.dragging_index?;
        let item = self.sequence.get(index)?;
        Some(Overlay {
            index,
            item,
            top: self.pointer_y,
        })
    }

    /// Rows of the list body in order.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'a, T>> + '_ {
        self.sequence
            .iter()
            .enumerate()
            .map(move |(index, item)| RowView {
                index,
                item,
                hidden: self.row_hidden(index),
            })
    }
}

/// One row of the list body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a, T> {
    pub index: usize,
    pub item: &'a T,
    /// Drawn transparent: the overlay stands in for it.
    pub hidden: bool,
}

/// The floating copy of the lifted row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay<'a, T> {
    pub index: usize,
    pub item: &'a T,
    /// Top edge in screen coordinates (the raw pointer Y).
    pub top: f32,
}

/// Row color for the demo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowColor {
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
}

impl RowColor {
    /// Lowercase color name, as understood by most style systems.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

/// Fixed identifier-to-color mapping for the demo items `0..=4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
    const COLORS: [RowColor; 5] = [
        RowColor::Red,
        RowColor::Orange,
        RowColor::Yellow,
        RowColor::Blue,
        RowColor::Green,
    ];

    /// Color for an item identifier, `None` if unmapped.
    #[must_use]
    pub fn color(&self, id: u32) -> Option<RowColor> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::COLORS.get(i).copied())
    }

    /// The demo sequence, one item per mapped color.
    #[must_use]
    pub fn demo_items(&self) -> Vec<u32> {
        (0..Self::COLORS.len() as u32).collect()
    }
}
