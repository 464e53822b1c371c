//! Inline card editing: one card at a time, seeded with its current text.

use crate::{
    domain::{Board, CardId},
    error::Result,
    state::BoardState,
};
use tracing::debug;

/// An open edit of one card's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub card_id: CardId,
    /// Text the card had when editing began
    pub original: String,
    /// Current content of the edit field
    pub buffer: String,
}

/// Tracks the single inline edit that may be open on the board
#[derive(Debug, Default)]
pub struct InlineEditor {
    session: Option<EditSession>,
}

impl InlineEditor {
    /// Creates an editor with no open edit
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the open edit, if any
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// True while `card_id` is the card being edited
    pub fn is_editing(&self, card_id: &CardId) -> bool {
        self.session
            .as_ref()
            .map(|session| &session.card_id == card_id)
            .unwrap_or(false)
    }

    /// Opens an edit for a card; ignored while another edit is open or if the
    /// card is not on the board.
    pub fn begin(&mut self, board: &Board, card_id: &CardId) -> Option<&EditSession> {
        if self.session.is_some() {
            return None;
        }
        let card = board.find_card(card_id)?;

        self.session = Some(EditSession {
            card_id: card_id.clone(),
            original: card.text.clone(),
            buffer: card.text.clone(),
        });
        self.session.as_ref()
    }

    /// Replaces the field content
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.buffer = text.into();
        }
    }

    /// Commits the field through `edit_card` and closes the session.
    ///
    /// Used for explicit submit and for focus loss. A field left as it was
    /// when the edit began commits nothing, even if the card changed in the
    /// meantime. Returns whether the card text changed.
    pub async fn confirm(&mut self, state: &mut BoardState) -> Result<bool> {
        let Some(session) = self.session.take() else {
            return Ok(false);
        };
        if session.buffer.trim() == session.original {
            debug!(card = %session.card_id, "edit confirmed without changes");
            return Ok(false);
        }

        let changed = state.edit_card(&session.card_id, &session.buffer).await?;
        debug!(card = %session.card_id, changed, "edit confirmed");
        Ok(changed)
    }

    /// Discards the field content and closes the session
    pub fn cancel(&mut self) -> Option<EditSession> {
        let session = self.session.take();
        if let Some(session) = &session {
            debug!(card = %session.card_id, "edit cancelled");
        }
        session
    }
}
