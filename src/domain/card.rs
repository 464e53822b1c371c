use crate::domain::id::CardId;
use serde::{Deserialize, Serialize};

/// A single text card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    /// Creates a card from already-normalized text
    pub fn new(id: CardId, text: String) -> Self {
        Self { id, text }
    }
}

/// Trims card text, returning `None` when nothing printable is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
