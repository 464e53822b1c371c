use crate::{
    config::BoardConfig,
    domain::{
        card::{normalize_text, Card},
        column::Column,
        id::{CardId, ColumnId},
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a card currently sits on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLocation {
    pub column_id: ColumnId,
    pub index: usize,
}

/// Kanban board state: columns in display order, each owning its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a new board from columns in display order
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Builds the empty starting board described by a config
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(
            config
                .columns
                .iter()
                .map(|seed| Column::new(seed.id.as_str(), seed.title.as_str()))
                .collect(),
        )
    }

    /// Returns the column with the given id
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == column_id)
    }

    fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == column_id)
    }

    /// Finds the column and index holding a card
    pub fn locate_card(&self, card_id: &CardId) -> Option<CardLocation> {
        self.columns.iter().find_map(|col| {
            col.position_of(card_id).map(|index| CardLocation {
                column_id: col.id.clone(),
                index,
            })
        })
    }

    /// Returns a card wherever it sits on the board
    pub fn find_card(&self, card_id: &CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .find(|card| &card.id == card_id)
    }

    /// True if any column holds the card
    pub fn contains_card(&self, card_id: &CardId) -> bool {
        self.find_card(card_id).is_some()
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Appends a card to the end of a column.
    /// Returns false when the column does not exist.
    pub fn push_card(&mut self, column_id: &ColumnId, card: Card) -> bool {
        match self.column_mut(column_id) {
            Some(column) => {
                column.cards.push(card);
                true
            }
            None => false,
        }
    }

    /// Removes a card from whichever column holds it
    pub fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        self.columns.iter_mut().find_map(|col| {
            col.position_of(card_id)
                .map(|index| col.cards.remove(index))
        })
    }

    /// Replaces a card's text with the trimmed `new_text`.
    ///
    /// Blank text, unchanged text and unknown cards leave the board untouched
    /// and return false.
    pub fn set_card_text(&mut self, card_id: &CardId, new_text: &str) -> bool {
        let Some(text) = normalize_text(new_text) else {
            return false;
        };

        let card = self
            .columns
            .iter_mut()
            .flat_map(|col| col.cards.iter_mut())
            .find(|card| &card.id == card_id);

        match card {
            Some(card) if card.text != text => {
                card.text = text;
                true
            }
            _ => false,
        }
    }

    /// Moves a card to `target_index` of the target column, clamping the index
    /// to the column's bounds once the card has left its old slot.
    ///
    /// Returns false (and changes nothing) if the card or the target column is
    /// unknown, or if the card would end up exactly where it already is.
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        target_column_id: &ColumnId,
        target_index: usize,
    ) -> bool {
        let Some(source) = self.locate_card(card_id) else {
            return false;
        };
        let Some(target) = self.column(target_column_id) else {
            return false;
        };

        if &source.column_id == target_column_id {
            let landing = target_index.min(target.len() - 1);
            if landing == source.index {
                return false;
            }
        }

        // Both ends were checked above, so the remove-then-insert pair cannot
        // stop half way.
        let Some(card) = self.remove_card(card_id) else {
            return false;
        };
        match self.column_mut(target_column_id) {
            Some(column) => {
                column.insert_clamped(target_index, card);
                true
            }
            None => false,
        }
    }

    /// Checks the structural invariants: unique column ids, unique card ids
    /// across the whole board, and non-blank trimmed card text.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::DuplicateColumnId(column.id.to_string()));
            }
            for card in &column.cards {
                if !card_ids.insert(&card.id) {
                    return Err(BoardError::DuplicateCardId(card.id.to_string()));
                }
                if normalize_text(&card.text).as_deref() != Some(card.text.as_str()) {
                    return Err(BoardError::InvalidCardText(card.id.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
