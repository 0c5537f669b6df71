#![forbid(unsafe_code)]

//! Drag-to-reorder state machine.
//!
//! # States
//!
//! ```text
//!            drag start (geometry ready, list non-empty)
//!   Idle ─────────────────────────────────────────────▶ Dragging { index }
//!    ▲                                                     │  │
//!    │              drag end / drag cancel                 │  │ drag move: record y
//!    └─────────────────────────────────────────────────────┘  │ frame tick: remap y,
//!                                                             ▼ relocate on change
//! ```
//!
//! # Invariants
//!
//! 1. Pointer moves only overwrite the pointer sample. Relocation happens on
//!    frame ticks, so reorder cost follows frame rate, not input rate.
//! 2. Each tick commits at most one relocation, from the last committed index
//!    to the index under the current pointer sample.
//! 3. The sequence length never changes while dragging.
//! 4. End and cancel reset identically; no session state survives either.
//! 5. After end or cancel, an already-requested frame is rejected as stale
//!    and mutates nothing.
//!
//! # Failure Modes
//!
//! | Condition | Fallback |
//! |-----------|----------|
//! | Drag start on an empty list | Start refused, stays `Idle` |
//! | Drag start before rows are measured | Start refused, stays `Idle` |
//! | Row height becomes unusable mid-drag | Tick commits nothing, loop keeps running |
//! | Drag start during a session | Per [`SessionPolicy`] |
//! | End/cancel while idle | Ignored |

use crate::config::{ReorderConfig, SessionPolicy};
use crate::error::{ReorderError, Result};
use crate::event::{LayoutEvent, PointerEvent};
use crate::geometry::GeometryTracker;
use crate::mapper;
use crate::render::{Overlay, RenderState};
use crate::responder::ResponderPolicy;
use crate::scheduler::{FrameLoop, FrameScheduler, FrameToken, ManualScheduler};
use crate::sequence;

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Index currently lifted; follows the item as it relocates.
        index: usize,
        /// Index the item was lifted from.
        origin: usize,
    },
}

impl DragPhase {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Lifted index, `None` when idle.
    #[must_use]
    pub const fn dragging_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { index, .. } => Some(*index),
        }
    }
}

/// Summary of a finished drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// Index the item was lifted from.
    pub from: usize,
    /// Index the item ended at.
    pub to: usize,
    /// Whether the session was cancelled rather than released.
    pub cancelled: bool,
}

impl DragOutcome {
    /// Whether the session changed the order.
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// A relocation committed by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub from: usize,
    pub to: usize,
}

/// Owns the sequence, the drag session, the pointer sample, and the list
/// geometry, and drives relocations from frame ticks.
///
/// `S` is the host's frame source; [`ManualScheduler`] by default.
#[derive(Debug)]
pub struct DragController<T, S = ManualScheduler> {
    items: Vec<T>,
    config: ReorderConfig,
    geometry: GeometryTracker,
    phase: DragPhase,
    pointer_y: f32,
    frames: FrameLoop,
    scheduler: S,
    revision: u64,
    ticks_in_session: u64,
}

impl<T> DragController<T, ManualScheduler> {
    /// Create an idle controller with a [`ManualScheduler`].
    #[must_use]
    pub fn new(items: Vec<T>, config: ReorderConfig) -> Self {
        Self::with_scheduler(items, config, ManualScheduler::new())
    }

    /// Deliver the oldest queued frame. Returns `false` if none was queued.
    pub fn pump_frame(&mut self) -> bool {
        match self.scheduler.take_next() {
            Some(token) => {
                self.on_frame(token);
                true
            }
            None => false,
        }
    }

    /// Deliver up to `max` queued frames, returning how many were delivered.
    ///
    /// Each accepted frame queues its successor while dragging, so the bound
    /// is what stops this from spinning for the whole session.
    pub fn pump_frames(&mut self, max: usize) -> usize {
        let mut delivered = 0;
        while delivered < max && self.pump_frame() {
            delivered += 1;
        }
        delivered
    }
}

impl<T, S: FrameScheduler> DragController<T, S> {
    /// Create an idle controller that requests frames from `scheduler`.
    #[must_use]
    pub fn with_scheduler(items: Vec<T>, config: ReorderConfig, scheduler: S) -> Self {
        Self {
            items,
            config,
            geometry: GeometryTracker::new(),
            phase: DragPhase::Idle,
            pointer_y: 0.0,
            frames: FrameLoop::new(),
            scheduler,
            revision: 0,
            ticks_in_session: 0,
        }
    }

    /// Seed geometry, e.g. when layout is known before the first event.
    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryTracker) -> Self {
        self.geometry = geometry;
        self
    }

    // --- Accessors --------------------------------------------------------

    #[must_use]
    pub fn sequence(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_sequence(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    #[must_use]
    pub const fn pointer_y(&self) -> f32 {
        self.pointer_y
    }

    #[must_use]
    pub const fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    #[must_use]
    pub const fn config(&self) -> &ReorderConfig {
        &self.config
    }

    #[must_use]
    pub const fn responder_policy(&self) -> ResponderPolicy {
        self.config.responder
    }

    /// Frames processed in the current (or last) session.
    #[must_use]
    pub const fn ticks_in_session(&self) -> u64 {
        self.ticks_in_session
    }

    #[must_use]
    pub const fn frame_loop(&self) -> &FrameLoop {
        &self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether the list surface may scroll right now.
    #[must_use]
    pub const fn scroll_enabled(&self) -> bool {
        !(self.phase.is_dragging() && self.config.disable_scroll_while_dragging)
    }

    /// Current render state.
    #[must_use]
    pub fn render_state(&self) -> RenderState<'_, T> {
        RenderState {
            dragging: self.phase.is_dragging(),
            dragging_index: self.phase.dragging_index(),
            sequence: &self.items,
            pointer_y: self.pointer_y,
            revision: self.revision,
        }
    }

    /// Overlay for the lifted row, `None` when idle.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay<'_, T>> {
        self.render_state().overlay()
    }

    /// Swap in a new sequence. Refused while a drag is active, since the
    /// lifted index would no longer refer to the lifted item.
    pub fn replace_sequence(&mut self, items: Vec<T>) -> Result<Vec<T>> {
        if let DragPhase::Dragging { index, .. } = self.phase {
            return Err(ReorderError::SessionActive {
                dragging_index: index,
            });
        }
        let old = std::mem::replace(&mut self.items, items);
        self.publish();
        Ok(old)
    }

    // --- Layout -----------------------------------------------------------

    pub fn on_scroll(&mut self, offset_y: f32) {
        self.geometry.set_scroll_offset(offset_y);
    }

    pub fn on_container_layout(&mut self, top_y: f32) {
        self.geometry.set_container_top(top_y);
    }

    pub fn on_row_layout(&mut self, height: f32) {
        self.geometry.set_row_height(height);
    }

    pub fn handle_layout(&mut self, event: LayoutEvent) {
        match event {
            LayoutEvent::Scroll { offset_y } => self.on_scroll(offset_y),
            LayoutEvent::ContainerLayout { top_y } => self.on_container_layout(top_y),
            LayoutEvent::RowLayout { height } => self.on_row_layout(height),
        }
    }

    // --- Pointer lifecycle ------------------------------------------------

    /// Begin a drag at `y`, returning the lifted index.
    ///
    /// Fails without touching state if the list is empty, rows are not
    /// measured, or (under [`SessionPolicy::IgnoreNewStart`]) a session is
    /// already running.
    pub fn try_start(&mut self, y: f32) -> Result<usize> {
        if self.items.is_empty() {
            return Err(ReorderError::EmptySequence);
        }
        let Some(index) = mapper::try_index_for_y(&self.geometry, y, self.items.len()) else {
            return Err(ReorderError::GeometryNotReady {
                row_height: self.geometry.row_height(),
            });
        };

        if let DragPhase::Dragging {
            index: active_index,
            ..
        } = self.phase
        {
            match self.config.session_policy {
                SessionPolicy::IgnoreNewStart => {
                    return Err(ReorderError::SessionActive {
                        dragging_index: active_index,
                    });
                }
                SessionPolicy::RestartSession => {
                    crate::debug!(
                        dragging_index = active_index,
                        "drag start during active session; restarting"
                    );
                    self.finish(true);
                }
            }
        }

        self.pointer_y = y;
        self.phase = DragPhase::Dragging {
            index,
            origin: index,
        };
        self.ticks_in_session = 0;
        if let Some(token) = self.frames.start() {
            self.scheduler.request_frame(token);
        }
        self.publish();
        crate::debug!(index, y, "drag started");
        Ok(index)
    }

    /// Pointer pressed on a drag handle. Returns whether a drag started.
    pub fn on_drag_start(&mut self, y: f32) -> bool {
        self.try_start(y)
            .inspect_err(|_err| {
                crate::debug!(error = %_err, y, "drag start refused");
            })
            .is_ok()
    }

    /// Record the latest pointer sample. Never relocates by itself.
    pub fn on_drag_move(&mut self, y: f32) {
        if self.phase.is_dragging() {
            self.pointer_y = y;
        }
    }

    /// Pointer released.
    pub fn on_drag_end(&mut self) -> Option<DragOutcome> {
        self.finish(false)
    }

    /// Gesture pre-empted. Resets exactly like [`on_drag_end`](Self::on_drag_end).
    pub fn on_drag_cancel(&mut self) -> Option<DragOutcome> {
        self.finish(true)
    }

    /// Dispatch a pointer event. Returns the outcome for terminal events
    /// that finished a session.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<DragOutcome> {
        match event {
            PointerEvent::DragStart { y } => {
                self.on_drag_start(y);
                None
            }
            PointerEvent::DragMove { y } => {
                self.on_drag_move(y);
                None
            }
            PointerEvent::DragEnd => self.on_drag_end(),
            PointerEvent::DragCancel => self.on_drag_cancel(),
        }
    }

    // --- Re-evaluation loop -------------------------------------------------

    /// Frame callback from the host's scheduler.
    ///
    /// Stale tokens (from a cancelled session or already consumed) are
    /// ignored. An accepted token runs one [`tick`](Self::tick) and requests
    /// the next frame while the session lasts.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<Relocation> {
        if !self.frames.accept(token) {
            crate::trace!(
                generation = token.generation(),
                seq = token.seq(),
                "stale frame ignored"
            );
            return None;
        }
        let relocation = self.tick();
        if let Some(next) = self.frames.reschedule() {
            self.scheduler.request_frame(next);
        }
        relocation
    }

    /// Run one re-evaluation step without any scheduler.
    ///
    /// Remaps the current pointer sample and, if the target index differs
    /// from the lifted index, relocates the lifted item there. No-op when
    /// idle.
    pub fn tick(&mut self) -> Option<Relocation> {
        let DragPhase::Dragging { index, origin } = self.phase else {
            return None;
        };
        self.ticks_in_session += 1;
        let span = crate::debug_span!("reorder_tick", tick = self.ticks_in_session, index);
        let _guard = span.enter();

        let Some(target) = mapper::try_index_for_y(&self.geometry, self.pointer_y, self.items.len())
        else {
            crate::trace!("geometry unusable; tick skipped");
            return None;
        };
        if target == index {
            return None;
        }

        sequence::move_element(&mut self.items, index, target);
        self.phase = DragPhase::Dragging {
            index: target,
            origin,
        };
        self.publish();
        crate::debug!(from = index, to = target, "relocated");
        Some(Relocation {
            from: index,
            to: target,
        })
    }

    fn finish(&mut self, cancelled: bool) -> Option<DragOutcome> {
        let DragPhase::Dragging { index, origin } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        self.frames.cancel();
        self.publish();
        crate::debug!(
            from = origin,
            to = index,
            cancelled,
            ticks = self.ticks_in_session,
            "drag finished"
        );
        Some(DragOutcome {
            from: origin,
            to: index,
            cancelled,
        })
    }

    fn publish(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController<u32> {
        DragController::new(vec![0, 1, 2, 3, 4], ReorderConfig::default())
            .with_geometry(GeometryTracker::with_layout(0.0, 0.0, 50.0))
    }

    #[test]
    fn starts_idle() {
        let c = controller();
        assert_eq!(c.phase(), DragPhase::Idle);
        assert!(c.scroll_enabled());
        assert_eq!(c.render_state().dragging_idx(), -1);
        assert_eq!(c.render_state().revision, 0);
    }

    #[test]
    fn start_lifts_row_under_pointer_and_requests_frame() {
        let mut c = controller();
        assert_eq!(c.try_start(110.0), Ok(2));
        assert_eq!(
            c.phase(),
            DragPhase::Dragging {
                index: 2,
                origin: 2
            }
        );
        assert!(!c.scroll_enabled());
        assert_eq!(c.scheduler().queued(), 1);
        let rs = c.render_state();
        assert!(rs.dragging);
        assert_eq!(rs.dragging_idx(), 2);
        assert_eq!(rs.pointer_y, 110.0);
    }

    #[test]
    fn move_does_not_relocate_until_tick() {
        let mut c = controller();
        c.on_drag_start(10.0);
        let rev = c.render_state().revision;
        c.on_drag_move(160.0);
        assert_eq!(c.sequence(), &[0, 1, 2, 3, 4]);
        assert_eq!(c.render_state().revision, rev);
        assert_eq!(c.tick(), Some(Relocation { from: 0, to: 3 }));
        assert_eq!(c.sequence(), &[1, 2, 3, 0, 4]);
        assert_eq!(c.phase().dragging_index(), Some(3));
    }

    #[test]
    fn only_latest_move_counts() {
        let mut c = controller();
        c.on_drag_start(10.0);
        for y in [60.0, 110.0, 160.0, 210.0, 60.0] {
            c.on_drag_move(y);
        }
        assert_eq!(c.tick(), Some(Relocation { from: 0, to: 1 }));
        assert_eq!(c.sequence(), &[1, 0, 2, 3, 4]);
    }

    #[test]
    fn tick_without_change_is_quiet() {
        let mut c = controller();
        c.on_drag_start(10.0);
        let rev = c.render_state().revision;
        c.on_drag_move(30.0);
        assert_eq!(c.tick(), None);
        assert_eq!(c.render_state().revision, rev);
        assert_eq!(c.ticks_in_session(), 1);
    }

    #[test]
    fn tick_while_idle_is_noop() {
        let mut c = controller();
        assert_eq!(c.tick(), None);
        assert_eq!(c.ticks_in_session(), 0);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut c = controller();
        c.on_drag_move(999.0);
        assert_eq!(c.pointer_y(), 0.0);
    }

    #[test]
    fn end_and_cancel_reset_identically() {
        for cancel in [false, true] {
            let mut c = controller();
            c.on_drag_start(10.0);
            c.on_drag_move(110.0);
            c.tick();
            let outcome = if cancel {
                c.on_drag_cancel()
            } else {
                c.on_drag_end()
            };
            assert_eq!(
                outcome,
                Some(DragOutcome {
                    from: 0,
                    to: 2,
                    cancelled: cancel
                })
            );
            assert_eq!(c.phase(), DragPhase::Idle);
            assert!(!c.frame_loop().is_running());
            assert!(c.scroll_enabled());
            assert_eq!(c.render_state().dragging_idx(), -1);
            assert_eq!(c.sequence(), &[1, 2, 0, 3, 4]);
        }
    }

    #[test]
    fn end_while_idle_is_ignored() {
        let mut c = controller();
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(c.on_drag_cancel(), None);
        assert_eq!(c.render_state().revision, 0);
    }

    #[test]
    fn refuses_start_on_empty_list() {
        let mut c: DragController<u32> = DragController::new(Vec::new(), ReorderConfig::default())
            .with_geometry(GeometryTracker::with_layout(0.0, 0.0, 50.0));
        assert_eq!(c.try_start(10.0), Err(ReorderError::EmptySequence));
        assert!(!c.on_drag_start(10.0));
        assert_eq!(c.scheduler().queued(), 0);
    }

    #[test]
    fn refuses_start_before_row_layout() {
        let mut c = DragController::new(vec![0u32, 1, 2], ReorderConfig::default());
        assert_eq!(
            c.try_start(10.0),
            Err(ReorderError::GeometryNotReady { row_height: 0.0 })
        );
        c.on_row_layout(40.0);
        assert_eq!(c.try_start(90.0), Ok(2));
    }

    #[test]
    fn unusable_geometry_mid_drag_skips_tick_but_keeps_loop() {
        let mut c = controller();
        c.on_drag_start(10.0);
        c.on_row_layout(0.0);
        c.on_drag_move(200.0);
        assert!(c.pump_frame());
        assert_eq!(c.sequence(), &[0, 1, 2, 3, 4]);
        assert!(c.frame_loop().is_running());
        c.on_row_layout(50.0);
        assert!(c.pump_frame());
        assert_eq!(c.sequence(), &[1, 2, 3, 4, 0]);
    }

    #[test]
    fn ignore_policy_keeps_running_session() {
        let mut c = controller();
        c.on_drag_start(10.0);
        assert_eq!(
            c.try_start(160.0),
            Err(ReorderError::SessionActive { dragging_index: 0 })
        );
        assert_eq!(c.phase().dragging_index(), Some(0));
        assert_eq!(c.pointer_y(), 10.0);
    }

    #[test]
    fn restart_policy_replaces_session() {
        let mut c = DragController::new(
            vec![0u32, 1, 2, 3, 4],
            ReorderConfig::default().with_session_policy(SessionPolicy::RestartSession),
        )
        .with_geometry(GeometryTracker::with_layout(0.0, 0.0, 50.0));
        c.on_drag_start(10.0);
        let first = c.frame_loop().pending().unwrap();
        assert_eq!(c.try_start(160.0), Ok(3));
        assert_eq!(
            c.phase(),
            DragPhase::Dragging {
                index: 3,
                origin: 3
            }
        );
        assert_ne!(c.frame_loop().pending(), Some(first));
        assert_eq!(c.on_frame(first), None);
    }

    #[test]
    fn replace_sequence_refused_while_dragging() {
        let mut c = controller();
        c.on_drag_start(60.0);
        assert_eq!(
            c.replace_sequence(vec![9]),
            Err(ReorderError::SessionActive { dragging_index: 1 })
        );
        c.on_drag_end();
        assert_eq!(c.replace_sequence(vec![9, 8]), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(c.sequence(), &[9, 8]);
    }

    #[test]
    fn layout_events_dispatch() {
        let mut c: DragController<u32> = DragController::new(vec![0], ReorderConfig::default());
        c.handle_layout(LayoutEvent::Scroll { offset_y: 12.0 });
        c.handle_layout(LayoutEvent::ContainerLayout { top_y: 3.0 });
        c.handle_layout(LayoutEvent::RowLayout { height: 48.0 });
        assert_eq!(
            *c.geometry(),
            GeometryTracker::with_layout(12.0, 3.0, 48.0)
        );
    }

    #[test]
    fn overlay_follows_pointer() {
        let mut c = controller();
        assert!(c.overlay().is_none());
        c.on_drag_start(10.0);
        c.on_drag_move(75.0);
        let overlay = c.overlay().unwrap();
        assert_eq!(*overlay.item, 0);
        assert_eq!(overlay.top, 75.0);
    }

    #[test]
    fn outcome_reports_no_move() {
        let mut c = controller();
        c.on_drag_start(60.0);
        c.pump_frames(3);
        let outcome = c.on_drag_end().unwrap();
        assert!(!outcome.moved());
        assert_eq!(outcome.from, 1);
    }
}
