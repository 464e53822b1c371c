//! Geometry the drag engine reads from whatever renders the board.

use crate::domain::{Board, CardId, ColumnId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pointer position in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    /// Creates a new rect from its four edges
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Returns the horizontal extent
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical midpoint, used to decide above/below when dropping
    pub fn mid_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// Edges count as inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// Reports where columns and cards are currently rendered.
///
/// Implementations answer for what is on screen right now; anything not
/// rendered returns `None` and is skipped by hit-testing.
/// The card being dragged may be reported in place or not at all; drop
/// targets do not depend on it.
pub trait LayoutOracle {
    /// Returns the rendered box of a column
    fn column_rect(&self, column_id: &ColumnId) -> Option<Rect>;

    /// Returns the rendered box of a card
    fn card_rect(&self, card_id: &CardId) -> Option<Rect>;
}

/// Layout built from explicit rectangles
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    columns: HashMap<ColumnId, Rect>,
    cards: HashMap<CardId, Rect>,
}

impl StaticLayout {
    /// Creates an empty layout where nothing is rendered
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a column; builder form of `set_column`
    pub fn with_column(mut self, column_id: impl Into<ColumnId>, rect: Rect) -> Self {
        self.columns.insert(column_id.into(), rect);
        self
    }

    /// Places a card; builder form of `set_card`
    pub fn with_card(mut self, card_id: impl Into<CardId>, rect: Rect) -> Self {
        self.cards.insert(card_id.into(), rect);
        self
    }

    /// Sets or replaces a column's box
    pub fn set_column(&mut self, column_id: ColumnId, rect: Rect) {
        self.columns.insert(column_id, rect);
    }

    /// Sets or replaces a card's box
    pub fn set_card(&mut self, card_id: CardId, rect: Rect) {
        self.cards.insert(card_id, rect);
    }

    /// Lays a board out as side-by-side columns of stacked, equal-height
    /// cards. Column `i` spans `[i * (width + gap), i * (width + gap) + width]`
    /// horizontally and `[0, column_height]` vertically; cards start at the
    /// column's top.
    pub fn stacked(
        board: &Board,
        column_width: f64,
        column_gap: f64,
        column_height: f64,
        card_height: f64,
    ) -> Self {
        let mut layout = Self::new();
        for (i, column) in board.columns.iter().enumerate() {
            let left = i as f64 * (column_width + column_gap);
            let right = left + column_width;
            layout.set_column(column.id.clone(), Rect::new(left, right, 0.0, column_height));

            for (j, card) in column.cards.iter().enumerate() {
                let top = j as f64 * card_height;
                layout.set_card(card.id.clone(), Rect::new(left, right, top, top + card_height));
            }
        }
        layout
    }
}

impl LayoutOracle for StaticLayout {
    fn column_rect(&self, column_id: &ColumnId) -> Option<Rect> {
        self.columns.get(column_id).copied()
    }

    fn card_rect(&self, card_id: &CardId) -> Option<Rect> {
        self.cards.get(card_id).copied()
    }
}
