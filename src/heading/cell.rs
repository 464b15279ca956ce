use super::column::{ColumnDescriptor, ColumnId};
use super::engine::{CARD, DragEngine, DragItem, HandlerId, hover};
use egui::{Rect, Ui, UiBuilder};

/// Opacity of the cell acting as the active drag source.
pub const DRAGGING_OPACITY: f32 = 0.3;

pub fn cell_opacity(is_dragging: bool) -> f32 {
    if is_dragging { DRAGGING_OPACITY } else { 1.0 }
}

/// What one rendered heading cell reports back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct CellResponse {
    pub id: ColumnId,
    /// Drag-order index, `None` for static cells.
    pub drag_index: Option<usize>,
    /// Drop-target id of draggable cells.
    pub handler_id: Option<HandlerId>,
    pub rect: Rect,
    pub opacity: f32,
}

pub(super) fn static_cell(ui: &mut Ui, column: &ColumnDescriptor, rect: Rect) -> CellResponse {
    paint_content(ui, column, rect, 1.0);
    CellResponse {
        id: column.id.clone(),
        drag_index: None,
        handler_id: None,
        rect,
        opacity: 1.0,
    }
}

/// Render a draggable cell and run its hover handler against the engine.
pub(super) fn draggable_cell<E, F>(
    ui: &mut Ui,
    engine: &mut E,
    column: &ColumnDescriptor,
    cell_id: egui::Id,
    rect: Rect,
    index: usize,
    tolerance: f32,
    on_swap: &mut F,
) -> CellResponse
where
    E: DragEngine<Handle = egui::Response>,
    F: FnMut(usize, usize),
{
    let response = ui
        .interact(rect, cell_id, egui::Sense::drag())
        .on_hover_cursor(egui::CursorIcon::Grab);
    let source = engine.register_drag_source(CARD, &response, || DragItem {
        id: column.id.clone(),
        index,
    });
    let target = engine.register_drop_target(CARD, &response);
    if target.is_over {
        hover(engine, CARD, &response, index, tolerance, on_swap);
    }
    let opacity = cell_opacity(source.is_dragging);
    paint_content(ui, column, rect, opacity);
    CellResponse {
        id: column.id.clone(),
        drag_index: Some(index),
        handler_id: Some(target.handler_id),
        rect,
        opacity,
    }
}

fn paint_content(ui: &mut Ui, column: &ColumnDescriptor, rect: Rect, opacity: f32) {
    let mut cell_ui = ui.new_child(
        UiBuilder::new()
            .max_rect(rect.shrink2(egui::vec2(4.0, 0.0)))
            .layout(egui::Layout::left_to_right(egui::Align::Center)),
    );
    cell_ui.set_opacity(opacity);
    cell_ui.add(
        egui::Label::new(column.item.clone())
            .selectable(false)
            .truncate(),
    );
}
