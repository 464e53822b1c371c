use crate::{
    domain::{CardId, ColumnId},
    drag::target::DropTarget,
    layout::{Point, Rect},
};

/// Everything captured about an in-flight drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub card_id: CardId,
    pub source_column_id: ColumnId,
    /// Position of the card in its column when the drag started
    pub source_index: usize,
    /// Pointer position relative to the card's top-left corner
    pub offset: Point,
    pub card_width: f64,
    pub card_height: f64,
    /// Last known pointer position
    pub pointer: Point,
    /// Target resolved by the latest pointer-move, `None` until the first move
    /// or while the pointer is outside every column
    pub hover: Option<DropTarget>,
    /// Where the placeholder is currently shown
    pub placeholder: Option<DropTarget>,
}

impl DragSession {
    pub(crate) fn new(
        card_id: CardId,
        source_column_id: ColumnId,
        source_index: usize,
        card_rect: Rect,
        pointer: Point,
    ) -> Self {
        Self {
            card_id,
            source_column_id,
            source_index,
            offset: Point::new(pointer.x - card_rect.left, pointer.y - card_rect.top),
            card_width: card_rect.width(),
            card_height: card_rect.height(),
            pointer,
            hover: None,
            placeholder: None,
        }
    }

    /// Box of the visual proxy following the pointer
    pub fn ghost_rect(&self) -> Rect {
        let left = self.pointer.x - self.offset.x;
        let top = self.pointer.y - self.offset.y;
        Rect::new(left, left + self.card_width, top, top + self.card_height)
    }

    /// True when dropping at `target` would leave the card where it is.
    ///
    /// Targets are resolved with the dragged card left out of its column, so
    /// only its own starting slot means "no change".
    pub fn is_origin(&self, target: &DropTarget) -> bool {
        target.column_id == self.source_column_id && target.index == self.source_index
    }
}
