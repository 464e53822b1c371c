use crate::{
    domain::{Board, CardId, Column, ColumnId},
    layout::{LayoutOracle, Point},
};

/// The slot a dragged card would land in if released now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub column_id: ColumnId,
    pub index: usize,
}

impl DropTarget {
    /// Creates a new target at `index` in `column_id`
    pub fn new(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// Hit-tests a pointer against the rendered columns, left to right.
///
/// The first column whose box contains the pointer wins; `None` means the
/// pointer is outside every column. The `dragged` card is left out of the
/// index, so the result is the slot the card would take once removed from
/// its current position.
pub fn resolve_drop_target(
    board: &Board,
    layout: &dyn LayoutOracle,
    pointer: Point,
    dragged: Option<&CardId>,
) -> Option<DropTarget> {
    board.columns.iter().find_map(|column| {
        let rect = layout.column_rect(&column.id)?;
        rect.contains(pointer).then(|| DropTarget {
            column_id: column.id.clone(),
            index: insertion_index(column, layout, pointer.y, dragged),
        })
    })
}

/// Board index, among the column's cards other than `dragged`, of the first
/// card whose vertical midpoint is below `y`; the count of those cards when
/// there is none. Cards the layout does not report are never chosen but keep
/// their place in the count.
pub fn insertion_index(
    column: &Column,
    layout: &dyn LayoutOracle,
    y: f64,
    dragged: Option<&CardId>,
) -> usize {
    let remaining = column
        .cards
        .iter()
        .filter(|card| Some(&card.id) != dragged);

    let mut count = 0;
    for (index, card) in remaining.enumerate() {
        if let Some(rect) = layout.card_rect(&card.id) {
            if y < rect.mid_y() {
                return index;
            }
        }
        count = index + 1;
    }
    count
}
