use super::engine::{
    DragEngine, DragItem, GestureKind, HandlerId, SourceMonitor, TargetMonitor,
};
use egui::{Pos2, Rect};
use tracing::info;

/// Gesture in flight inside one heading.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub kind: GestureKind,
    pub item: DragItem,
    /// Response id of the cell that started the gesture.
    pub source: egui::Id,
}

/// Drag state shared by every cell of one heading, kept in egui temp memory
/// between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragScope {
    pub session: Option<DragSession>,
}

impl DragScope {
    pub fn load(ctx: &egui::Context, id: egui::Id) -> Self {
        ctx.data_mut(|data| data.get_temp::<DragScope>(id))
            .unwrap_or_default()
    }

    pub fn store(self, ctx: &egui::Context, id: egui::Id) {
        ctx.data_mut(|data| data.insert_temp(id, self));
    }

    fn active(&self, kind: GestureKind) -> Option<&DragSession> {
        self.session.as_ref().filter(|session| session.kind == kind)
    }
}

/// Whether `pos` lies over `rect`, counting the right edge as part of the
/// next cell so adjacent cells never both claim the pointer.
pub fn pointer_over(rect: Rect, pos: Pos2) -> bool {
    rect.y_range().contains(pos.y) && pos.x >= rect.left() && pos.x < rect.right()
}

/// [`DragEngine`] backed by egui responses and pointer state.
pub struct EguiDragEngine<'a> {
    ctx: &'a egui::Context,
    scope: &'a mut DragScope,
}

impl<'a> EguiDragEngine<'a> {
    pub fn new(ctx: &'a egui::Context, scope: &'a mut DragScope) -> Self {
        Self { ctx, scope }
    }

    pub fn dragged_item(&self) -> Option<&DragItem> {
        self.scope.session.as_ref().map(|session| &session.item)
    }

    /// End the gesture once the pointer is released or Escape is pressed.
    pub fn finish(self) {
        let Some(session) = self.scope.session.as_ref() else {
            return;
        };
        let (cancelled, released) = self.ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                !i.pointer.any_down(),
            )
        });
        if cancelled {
            info!("Column drag cancelled for {}", session.item.id);
            self.scope.session = None;
        } else if released {
            info!(
                "Column {} dropped at position {}",
                session.item.id, session.item.index
            );
            self.scope.session = None;
        } else {
            self.ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}

impl DragEngine for EguiDragEngine<'_> {
    type Handle = egui::Response;

    fn register_drag_source<F>(
        &mut self,
        kind: GestureKind,
        handle: &egui::Response,
        begin: F,
    ) -> SourceMonitor
    where
        F: FnOnce() -> DragItem,
    {
        if handle.drag_started() {
            let item = begin();
            info!("Column drag started for {} at position {}", item.id, item.index);
            self.scope.session = Some(DragSession {
                kind,
                item,
                source: handle.id,
            });
        }
        SourceMonitor {
            is_dragging: self
                .scope
                .active(kind)
                .is_some_and(|session| session.source == handle.id),
        }
    }

    fn register_drop_target(&mut self, kind: GestureKind, handle: &egui::Response) -> TargetMonitor {
        let is_over = self.scope.active(kind).is_some()
            && self
                .client_offset()
                .is_some_and(|pos| pointer_over(handle.rect, pos));
        TargetMonitor {
            handler_id: HandlerId(handle.id.value()),
            is_over,
        }
    }

    fn bounding_rect(&self, handle: &egui::Response) -> Option<Rect> {
        handle.rect.is_positive().then_some(handle.rect)
    }

    fn client_offset(&self) -> Option<Pos2> {
        self.ctx
            .input(|i| i.pointer.hover_pos().or_else(|| i.pointer.interact_pos()))
    }

    fn item_mut(&mut self, kind: GestureKind) -> Option<&mut DragItem> {
        self.scope
            .session
            .as_mut()
            .filter(|session| session.kind == kind)
            .map(|session| &mut session.item)
    }
}
