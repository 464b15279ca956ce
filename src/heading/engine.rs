//! Capability seam between the heading and whatever tracks pointer drags.
//!
//! The heading only needs to register cells as drag sources and drop
//! targets, look up a cell's bounds and the pointer position, and rewrite
//! the index carried by the active gesture. [`hover`] runs the swap
//! decision on top of those capabilities so any backend gets the same
//! reorder behaviour.

use super::column::ColumnId;
use super::reorder::{HoverOutcome, hover_outcome};
use egui::{Pos2, Rect};
use tracing::debug;

/// Tag restricting which drag sources a drop target accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureKind(pub &'static str);

/// Gesture kind shared by every heading cell.
pub const CARD: GestureKind = GestureKind("card");

/// Payload captured when a cell starts dragging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub id: ColumnId,
    /// Current drag-order position of the dragged column; updated after each swap request.
    pub index: usize,
}

/// Opaque identifier of a registered drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceMonitor {
    pub is_dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetMonitor {
    pub handler_id: HandlerId,
    /// True while a compatible gesture hovers the target.
    pub is_over: bool,
}

/// Drag-and-drop capabilities a heading cell relies on.
pub trait DragEngine {
    /// Whatever the backend attaches drag behaviour to.
    type Handle;

    /// Register `handle` as a source of `kind`; `begin` builds the payload
    /// when a gesture starts on it.
    fn register_drag_source<F>(
        &mut self,
        kind: GestureKind,
        handle: &Self::Handle,
        begin: F,
    ) -> SourceMonitor
    where
        F: FnOnce() -> DragItem;

    fn register_drop_target(&mut self, kind: GestureKind, handle: &Self::Handle) -> TargetMonitor;

    /// Screen bounds of an attached handle, `None` until it is laid out.
    fn bounding_rect(&self, handle: &Self::Handle) -> Option<Rect>;

    /// Pointer position of the active gesture.
    fn client_offset(&self) -> Option<Pos2>;

    /// Payload of the active gesture when it is of `kind`.
    fn item_mut(&mut self, kind: GestureKind) -> Option<&mut DragItem>;
}

/// Hover handler of a draggable cell at `hover_index`.
///
/// Returns `None` when there is nothing to evaluate: no gesture of `kind`,
/// a detached handle or no pointer position. On a swap the owner callback
/// runs first and the payload then adopts `hover_index`, so repeated hovers
/// over the same cell do not request the swap again.
pub fn hover<E, F>(
    engine: &mut E,
    kind: GestureKind,
    handle: &E::Handle,
    hover_index: usize,
    tolerance: f32,
    on_swap: &mut F,
) -> Option<HoverOutcome>
where
    E: DragEngine,
    F: FnMut(usize, usize),
{
    let rect = engine.bounding_rect(handle)?;
    let pointer = engine.client_offset()?;
    let item = engine.item_mut(kind)?;
    let outcome = hover_outcome(item.index, hover_index, rect, pointer.x, tolerance);
    if let HoverOutcome::Swap { from, to } = outcome {
        debug!("Requesting column swap {from} -> {to} for {}", item.id);
        on_swap(from, to);
        item.index = to;
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    /// In-memory engine where handles are cell rects.
    #[derive(Default)]
    struct FakeEngine {
        item: Option<DragItem>,
        pointer: Option<Pos2>,
    }

    impl DragEngine for FakeEngine {
        type Handle = Option<Rect>;

        fn register_drag_source<F>(&mut self, _: GestureKind, _: &Self::Handle, _: F) -> SourceMonitor
        where
            F: FnOnce() -> DragItem,
        {
            SourceMonitor::default()
        }

        fn register_drop_target(&mut self, _: GestureKind, _: &Self::Handle) -> TargetMonitor {
            TargetMonitor {
                handler_id: HandlerId(0),
                is_over: self.item.is_some(),
            }
        }

        fn bounding_rect(&self, handle: &Self::Handle) -> Option<Rect> {
            *handle
        }

        fn client_offset(&self) -> Option<Pos2> {
            self.pointer
        }

        fn item_mut(&mut self, kind: GestureKind) -> Option<&mut DragItem> {
            (kind == CARD).then_some(self.item.as_mut()).flatten()
        }
    }

    fn cell() -> Option<Rect> {
        Some(Rect::from_min_size(pos2(100.0, 0.0), vec2(50.0, 20.0)))
    }

    fn dragging(index: usize, x: f32) -> FakeEngine {
        FakeEngine {
            item: Some(DragItem {
                id: ColumnId::new("b"),
                index,
            }),
            pointer: Some(pos2(x, 10.0)),
        }
    }

    #[test]
    fn swap_updates_payload_index() {
        let mut engine = dragging(0, 120.0);
        let mut calls = Vec::new();
        let outcome = hover(&mut engine, CARD, &cell(), 2, 5.0, &mut |a, b| calls.push((a, b)));
        assert_eq!(outcome, Some(HoverOutcome::Swap { from: 0, to: 2 }));
        assert_eq!(calls, vec![(0, 2)]);
        assert_eq!(engine.item.map(|item| item.index), Some(2));
    }

    #[test]
    fn detached_handle_skips_hover() {
        let mut engine = dragging(0, 120.0);
        let mut calls = 0;
        let outcome = hover(&mut engine, CARD, &None, 2, 5.0, &mut |_, _| calls += 1);
        assert_eq!(outcome, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn other_gesture_kinds_are_ignored() {
        let mut engine = dragging(0, 120.0);
        let mut calls = 0;
        let other = GestureKind("file");
        let outcome = hover(&mut engine, other, &cell(), 2, 5.0, &mut |_, _| calls += 1);
        assert_eq!(outcome, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn suppressed_hover_keeps_payload_index() {
        let mut engine = dragging(0, 102.0);
        let mut calls = 0;
        let outcome = hover(&mut engine, CARD, &cell(), 1, 5.0, &mut |_, _| calls += 1);
        assert_eq!(outcome, Some(HoverOutcome::Suppressed));
        assert_eq!(calls, 0);
        assert_eq!(engine.item.map(|item| item.index), Some(0));
    }
}
