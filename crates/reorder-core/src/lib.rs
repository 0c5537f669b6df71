#![forbid(unsafe_code)]

//! Core: drag-to-reorder for vertically scrolling lists.
//!
//! # Role
//! `reorder-core` is the headless part of a reorderable list. It turns a
//! stream of pointer lifecycle events and layout notifications into in-place
//! relocations of a sequence, and publishes a [`render::RenderState`] that a
//! list surface draws from.
//!
//! # Primary responsibilities
//! - **GeometryTracker**: latest scroll offset, container top, and row height.
//! - **Position mapping**: raw pointer Y to a clamped list index.
//! - **Sequence mutation**: order-preserving single-element relocation.
//! - **DragController**: the `Idle | Dragging` state machine and its
//!   per-frame re-evaluation loop.
//!
//! # How it fits together
//! The host forwards pointer events (`on_drag_*`) and layout events
//! (`on_scroll`, `on_row_layout`, ...) to the controller, fires frame tokens
//! requested through a [`scheduler::FrameScheduler`], and redraws whenever
//! [`render::RenderState::revision`] changes. Pointer moves only record the
//! latest sample; relocation happens on frame ticks, so reorder cost is tied
//! to frame rate rather than input rate.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod mapper;
pub mod render;
pub mod responder;
pub mod scheduler;
pub mod sequence;

pub use config::{ReorderConfig, SessionPolicy};
pub use controller::{DragController, DragOutcome, DragPhase};
pub use error::{ReorderError, Result};
pub use event::{LayoutEvent, PointerEvent};
pub use geometry::GeometryTracker;
pub use render::RenderState;
pub use responder::ResponderPolicy;
pub use scheduler::{FrameLoop, FrameScheduler, FrameToken, ManualScheduler};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
