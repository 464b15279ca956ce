//! Swap eligibility for a pointer hovering a draggable cell.

use egui::Rect;

/// Distance in points the pointer must travel past the near edge of the
/// hovered cell before a swap is requested.
pub const SWAP_EDGE_TOLERANCE: f32 = 5.0;

/// Result of evaluating one hover update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverOutcome {
    /// The dragged cell is over its own slot.
    SameCell,
    /// The pointer has not cleared the near edge yet.
    Suppressed,
    /// The owner should swap drag-order positions `from` and `to`.
    Swap { from: usize, to: usize },
}

/// Decide whether a pointer at `pointer_x` over `cell` should swap the
/// dragged cell at `drag_index` with the hovered one at `hover_index`.
pub fn hover_outcome(
    drag_index: usize,
    hover_index: usize,
    cell: Rect,
    pointer_x: f32,
    tolerance: f32,
) -> HoverOutcome {
    if drag_index == hover_index {
        return HoverOutcome::SameCell;
    }
    let offset = pointer_x - cell.left();
    let dragging_right = drag_index < hover_index;
    if dragging_right && offset < tolerance {
        return HoverOutcome::Suppressed;
    }
    if !dragging_right && offset > cell.width() - tolerance {
        return HoverOutcome::Suppressed;
    }
    HoverOutcome::Swap {
        from: drag_index,
        to: hover_index,
    }
}
