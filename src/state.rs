//! The live board and its mutation rules.
//!
//! Every mutation that changes the board is followed by exactly one
//! full-board write. Mutations that change nothing (unknown ids, blank or
//! unchanged text, moving a card onto its own slot) never write.

use crate::{
    domain::{normalize_text, Board, Card, CardId, ColumnId, IdGenerator, RandomCardIds},
    error::Result,
    storage::PersistenceStore,
};
use tracing::debug;

/// The board being edited, saved to its store after every effective change
pub struct BoardState {
    board: Board,
    store: PersistenceStore,
    ids: Box<dyn IdGenerator>,
}

impl BoardState {
    /// Loads the board from the store (or its default) with random card ids
    pub async fn load(store: PersistenceStore) -> Self {
        Self::load_with_ids(store, RandomCardIds).await
    }

    /// Same as `load`, drawing new card ids from `ids`
    pub async fn load_with_ids(store: PersistenceStore, ids: impl IdGenerator + 'static) -> Self {
        let board = store.load().await;
        Self::with_board(board, store, ids)
    }

    /// Wraps an already-loaded board without touching the store
    pub fn with_board(
        board: Board,
        store: PersistenceStore,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        Self {
            board,
            store,
            ids: Box::new(ids),
        }
    }

    /// Read-only snapshot for presentation
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the store mutations are saved to
    pub fn store(&self) -> &PersistenceStore {
        &self.store
    }

    /// Writes the full board to the store
    pub async fn save(&self) -> Result<()> {
        self.store.save(&self.board).await
    }

    /// Appends a card to the end of a column.
    ///
    /// Returns `None` without generating an id or saving when the trimmed text
    /// is empty or the column is unknown.
    pub async fn add_card(&mut self, column_id: &ColumnId, text: &str) -> Result<Option<Card>> {
        let Some(text) = normalize_text(text) else {
            return Ok(None);
        };
        if self.board.column(column_id).is_none() {
            return Ok(None);
        }

        let card = Card::new(self.fresh_card_id(), text);
        if !self.board.push_card(column_id, card.clone()) {
            return Ok(None);
        }

        debug!(card = %card.id, column = %column_id, "added card");
        self.save().await?;
        Ok(Some(card))
    }

    /// Removes a card from whichever column holds it
    pub async fn delete_card(&mut self, card_id: &CardId) -> Result<bool> {
        if self.board.remove_card(card_id).is_none() {
            return Ok(false);
        }

        debug!(card = %card_id, "deleted card");
        self.save().await?;
        Ok(true)
    }

    /// Replaces a card's text; blank or unchanged text is ignored
    pub async fn edit_card(&mut self, card_id: &CardId, new_text: &str) -> Result<bool> {
        if !self.board.set_card_text(card_id, new_text) {
            return Ok(false);
        }

        debug!(card = %card_id, "edited card");
        self.save().await?;
        Ok(true)
    }

    /// Moves a card into `target_column_id` at `target_index` (clamped)
    pub async fn move_card(
        &mut self,
        card_id: &CardId,
        target_column_id: &ColumnId,
        target_index: usize,
    ) -> Result<bool> {
        if !self
            .board
            .move_card(card_id, target_column_id, target_index)
        {
            return Ok(false);
        }

        debug!(card = %card_id, column = %target_column_id, index = target_index, "moved card");
        self.save().await?;
        Ok(true)
    }

    fn fresh_card_id(&mut self) -> CardId {
        loop {
            let id = self.ids.next_card_id();
            if !self.board.contains_card(&id) {
                return id;
            }
            debug!(card = %id, "generated id already on board, drawing again");
        }
    }
}
