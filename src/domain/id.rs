use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a card (e.g., `card-1718000000000-3f9a2c1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Creates a card id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque identifier of a column (e.g., `col-1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Source of fresh card identifiers.
///
/// Implementations only need to be unique with overwhelming probability;
/// the board state re-draws on a collision with an existing card.
pub trait IdGenerator: Send {
    /// Returns the next candidate id
    fn next_card_id(&mut self) -> CardId;
}

/// Timestamp plus random suffix, the default generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCardIds;

impl RandomCardIds {
    const SUFFIX_LEN: usize = 7;
}

impl IdGenerator for RandomCardIds {
    fn next_card_id(&mut self) -> CardId {
        let random = Uuid::new_v4().simple().to_string();
        CardId(format!(
            "card-{}-{}",
            Utc::now().timestamp_millis(),
            &random[..Self::SUFFIX_LEN]
        ))
    }
}

/// Deterministic generator producing `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone)]
pub struct SequentialCardIds {
    prefix: String,
    next: u64,
}

impl SequentialCardIds {
    /// Creates a generator whose first id is `<prefix>1`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialCardIds {
    fn default() -> Self {
        Self::new("c")
    }
}

impl IdGenerator for SequentialCardIds {
    fn next_card_id(&mut self) -> CardId {
        let id = CardId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_card_id_format() {
        let id = RandomCardIds.next_card_id();
        let parts: Vec<&str> = id.as_str().splitn(3, '-').collect();

        assert_eq!(parts[0], "card");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 7);
    }

    #[test]
    fn test_random_card_ids_are_distinct() {
        let mut ids = RandomCardIds;
        let seen: HashSet<CardId> = (0..1000).map(|_| ids.next_card_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_sequential_card_ids() {
        let mut ids = SequentialCardIds::new("n");
        assert_eq!(ids.next_card_id().as_str(), "n1");
        assert_eq!(ids.next_card_id().as_str(), "n2");

        let mut defaults = SequentialCardIds::default();
        assert_eq!(defaults.next_card_id().as_str(), "c1");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ColumnId::from("col-1")).unwrap();
        assert_eq!(json, "\"col-1\"");

        let id: CardId = serde_json::from_str("\"card-1\"").unwrap();
        assert_eq!(id, CardId::from("card-1"));
    }
}
