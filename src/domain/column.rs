use crate::domain::{
    card::Card,
    id::{CardId, ColumnId},
};
use serde::{Deserialize, Serialize};

/// An ordered list of cards under a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates a new column with no cards
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Replaces the column's cards
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Position of a card among this column's cards
    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }

    /// Inserts a card at `index`, clamped to the end of the column.
    /// Returns the index the card actually landed at.
    pub fn insert_clamped(&mut self, index: usize, card: Card) -> usize {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        index
    }

    /// Returns the number of cards in the column
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the column holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
