//! Reorderable heading row.
//!
//! [`SortableHeading`] lays out column descriptors left to right. Static
//! columns are plain cells; draggable columns get a dense drag-order index
//! and can be dragged over each other, which asks the owner to swap two
//! drag-order positions. The widget never reorders anything itself: the
//! owner applies the swap and passes the new column list on the next frame.

pub mod cell;
pub mod column;
pub mod egui_engine;
pub mod engine;
pub mod reorder;

pub use cell::{CellResponse, DRAGGING_OPACITY, cell_opacity};
pub use column::{ColumnDescriptor, ColumnId, drag_order, flex_basis, resolve_widths};
pub use egui_engine::{DragScope, DragSession, EguiDragEngine, pointer_over};
pub use engine::{
    CARD, DragEngine, DragItem, GestureKind, HandlerId, SourceMonitor, TargetMonitor, hover,
};
pub use reorder::{HoverOutcome, SWAP_EDGE_TOLERANCE, hover_outcome};

use egui::Ui;

/// Default row height of the heading.
pub const HEADING_HEIGHT: f32 = 24.0;

/// Heading row widget; build one per frame.
pub struct SortableHeading<'a> {
    id_salt: egui::Id,
    columns: &'a [ColumnDescriptor],
    height: f32,
    tolerance: f32,
}

/// Outcome of showing a heading for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadingResponse {
    /// One entry per column, in input order.
    pub cells: Vec<CellResponse>,
    /// Swaps requested from the owner during this frame.
    pub swaps: Vec<(usize, usize)>,
    /// Column currently being dragged, if any.
    pub dragging: Option<ColumnId>,
}

impl HeadingResponse {
    /// Area covered by the row, `None` when it has no cells.
    pub fn rect(&self) -> Option<egui::Rect> {
        self.cells.iter().map(|cell| cell.rect).reduce(egui::Rect::union)
    }
}

impl<'a> SortableHeading<'a> {
    pub fn new(id_salt: impl std::hash::Hash, columns: &'a [ColumnDescriptor]) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            columns,
            height: HEADING_HEIGHT,
            tolerance: SWAP_EDGE_TOLERANCE,
        }
    }

    /// Row height; defaults to [`HEADING_HEIGHT`].
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Override the edge tolerance used before a swap is requested.
    pub fn swap_edge_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Render the row, invoking `on_swap(drag_index, hover_index)` for each
    /// swap request.
    pub fn show(self, ui: &mut Ui, mut on_swap: impl FnMut(usize, usize)) -> HeadingResponse {
        let id = ui.make_persistent_id(self.id_salt);
        let ctx = ui.ctx().clone();
        let mut scope = DragScope::load(&ctx, id);
        let mut engine = EguiDragEngine::new(&ctx, &mut scope);
        let mut swaps = Vec::new();
        let cells = self.show_cells(ui, id, &mut engine, &mut |from, to| {
            swaps.push((from, to));
            on_swap(from, to);
        });
        engine.finish();
        let dragging = scope.session.as_ref().map(|session| session.item.id.clone());
        scope.store(&ctx, id);
        HeadingResponse {
            cells,
            swaps,
            dragging,
        }
    }

    fn show_cells<F>(
        &self,
        ui: &mut Ui,
        id: egui::Id,
        engine: &mut EguiDragEngine<'_>,
        on_swap: &mut F,
    ) -> Vec<CellResponse>
    where
        F: FnMut(usize, usize),
    {
        let widths = resolve_widths(self.columns, ui.available_width());
        let order = drag_order(self.columns);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            self.columns
                .iter()
                .zip(widths)
                .zip(order)
                .map(|((column, width), drag_index)| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(width, self.height),
                        egui::Sense::hover(),
                    );
                    match drag_index {
                        Some(index) => cell::draggable_cell(
                            ui,
                            engine,
                            column,
                            id.with(&column.id),
                            rect,
                            index,
                            self.tolerance,
                            on_swap,
                        ),
                        None => cell::static_cell(ui, column, rect),
                    }
                })
                .collect()
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ColumnOrder;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::fixed("a", 100.0, "Key"),
            ColumnDescriptor::draggable("b", 0.0, "English"),
            ColumnDescriptor::draggable("c", 0.0, "German"),
            ColumnDescriptor::draggable("d", 0.0, "Czech"),
        ]
    }

    fn show_once(columns: &[ColumnDescriptor]) -> HeadingResponse {
        let ctx = egui::Context::default();
        let mut response = HeadingResponse::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = SortableHeading::new("heading", columns).show(ui, |_, _| {});
            });
        });
        response
    }

    #[test]
    fn cells_follow_input_order_with_dense_drag_indices() {
        let response = show_once(&columns());
        let ids: Vec<&str> = response.cells.iter().map(|cell| cell.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        let indices: Vec<Option<usize>> =
            response.cells.iter().map(|cell| cell.drag_index).collect();
        assert_eq!(indices, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn idle_heading_renders_everything_opaque() {
        let response = show_once(&columns());
        assert!(response.cells.iter().all(|cell| cell.opacity == 1.0));
        assert!(response.swaps.is_empty());
        assert_eq!(response.dragging, None);
    }

    #[test]
    fn only_draggable_cells_register_drop_targets() {
        let response = show_once(&columns());
        assert!(response.cells[0].handler_id.is_none());
        let handlers: Vec<HandlerId> = response
            .cells
            .iter()
            .filter_map(|cell| cell.handler_id)
            .collect();
        assert_eq!(handlers.len(), 3);
        assert_ne!(handlers[0], handlers[1]);
    }

    #[test]
    fn static_cell_keeps_its_basis_width() {
        let response = show_once(&columns());
        assert_eq!(response.cells[0].rect.width(), 100.0);
    }

    #[test]
    fn row_rect_uses_configured_height() {
        let ctx = egui::Context::default();
        let columns = columns();
        let mut response = HeadingResponse::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                response = SortableHeading::new("heading", &columns)
                    .height(40.0)
                    .show(ui, |_, _| {});
            });
        });
        let rect = response.rect().unwrap();
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.left(), response.cells[0].rect.left());
        assert_eq!(rect.right(), response.cells[3].rect.right());
        assert_eq!(HeadingResponse::default().rect(), None);
    }

    /// Headless frame loop whose owner applies every requested swap.
    struct GestureRun {
        ctx: egui::Context,
        base: Vec<ColumnDescriptor>,
        order: ColumnOrder,
        swaps: Vec<(usize, usize)>,
    }

    impl GestureRun {
        fn new() -> Self {
            let ctx = egui::Context::default();
            ctx.options_mut(|options| options.max_passes = std::num::NonZeroUsize::MIN);
            let base = vec![
                ColumnDescriptor::fixed("a", 100.0, "Key"),
                ColumnDescriptor::draggable("b", 100.0, "English"),
                ColumnDescriptor::draggable("c", 100.0, "German"),
                ColumnDescriptor::draggable("d", 100.0, "Czech"),
            ];
            let order = ColumnOrder::new(["b", "c", "d"].into_iter().map(ColumnId::from).collect());
            Self {
                ctx,
                base,
                order,
                swaps: Vec::new(),
            }
        }

        fn frame(&mut self, events: Vec<egui::Event>) -> HeadingResponse {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 200.0),
                )),
                events,
                ..Default::default()
            };
            let columns = self.order.arrange(&self.base);
            let mut response = HeadingResponse::default();
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    response = SortableHeading::new("heading", &columns).show(ui, |_, _| {});
                });
            });
            for &(a, b) in &response.swaps {
                self.order.swap(a, b);
                self.swaps.push((a, b));
            }
            response
        }

        fn move_to(&mut self, pos: egui::Pos2) -> HeadingResponse {
            self.frame(vec![egui::Event::PointerMoved(pos)])
        }

        fn button(&mut self, pos: egui::Pos2, pressed: bool) -> HeadingResponse {
            self.frame(vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    modifiers: egui::Modifiers::default(),
                },
            ])
        }

        fn escape(&mut self) -> HeadingResponse {
            self.frame(vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }])
        }

        /// Render once idle, then press on the cell `slot` and nudge the pointer.
        fn grab(&mut self, slot: usize) -> (Vec<egui::Rect>, HeadingResponse) {
            let idle = self.frame(Vec::new());
            let rects: Vec<egui::Rect> = idle.cells.iter().map(|cell| cell.rect).collect();
            let start = rects[slot].center();
            self.move_to(start);
            self.button(start, true);
            let response = self.move_to(start + egui::vec2(10.0, 0.0));
            (rects, response)
        }

        fn order_ids(&self) -> Vec<&str> {
            self.order.ids().iter().map(ColumnId::as_str).collect()
        }
    }

    fn opacities(response: &HeadingResponse) -> Vec<f32> {
        response.cells.iter().map(|cell| cell.opacity).collect()
    }

    #[test]
    fn dragged_cell_is_dimmed_and_swaps_past_the_edge_tolerance() {
        let mut run = GestureRun::new();
        let (rects, grabbed) = run.grab(1);
        assert_eq!(opacities(&grabbed), vec![1.0, 0.3, 1.0, 1.0]);
        assert_eq!(grabbed.dragging, Some(ColumnId::new("b")));

        let y = rects[3].center().y;
        let held = run.move_to(egui::pos2(rects[3].left() + 4.0, y));
        assert!(held.swaps.is_empty());
        assert!(run.swaps.is_empty());

        let crossed = run.move_to(egui::pos2(rects[3].left() + 6.0, y));
        assert_eq!(crossed.swaps, vec![(0, 2)]);
        assert_eq!(run.order_ids(), vec!["d", "c", "b"]);

        let dropped = run.button(egui::pos2(rects[3].left() + 6.0, y), false);
        assert_eq!(dropped.dragging, None);
        assert_eq!(run.swaps, vec![(0, 2)]);
        assert_eq!(opacities(&run.frame(Vec::new())), vec![1.0; 4]);
    }

    #[test]
    fn sweeping_right_walks_the_column_through_each_slot() {
        let mut run = GestureRun::new();
        let (rects, _) = run.grab(1);
        run.move_to(rects[2].center());
        run.move_to(rects[3].center());
        assert_eq!(run.swaps, vec![(0, 1), (1, 2)]);
        assert_eq!(run.order_ids(), vec!["c", "d", "b"]);
    }

    #[test]
    fn escape_cancels_the_drag() {
        let mut run = GestureRun::new();
        let (rects, grabbed) = run.grab(1);
        assert!(grabbed.dragging.is_some());

        let cancelled = run.escape();
        assert_eq!(cancelled.dragging, None);

        let after = run.move_to(egui::pos2(rects[3].left() + 6.0, rects[3].center().y));
        assert!(after.swaps.is_empty());
        assert_eq!(after.dragging, None);
        assert_eq!(opacities(&after), vec![1.0; 4]);
        assert!(run.swaps.is_empty());
    }
}
