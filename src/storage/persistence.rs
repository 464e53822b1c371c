use crate::{
    config::BoardConfig,
    domain::Board,
    error::Result,
    storage::Storage,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Binds a storage backend to the single slot holding the board.
///
/// Reads never fail: a missing, unreadable or malformed slot yields the
/// default board instead.
#[derive(Clone)]
pub struct PersistenceStore {
    storage: Arc<dyn Storage>,
    key: String,
    default_board: Board,
}

impl PersistenceStore {
    /// Creates a new store over `storage`, keyed and seeded from `config`
    pub fn new(storage: Arc<dyn Storage>, config: &BoardConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            default_board: Board::from_config(config),
        }
    }

    /// Returns the slot key the board is saved under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// A fresh copy of the board used when nothing usable is persisted
    pub fn default_board(&self) -> Board {
        self.default_board.clone()
    }

    /// Loads the persisted board, substituting the default board on any failure
    pub async fn load(&self) -> Board {
        match self.try_load().await {
            Ok(Some(board)) => {
                debug!(key = %self.key, cards = board.card_count(), "loaded board");
                board
            }
            Ok(None) => {
                debug!(key = %self.key, "no persisted board, using default");
                self.default_board()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "persisted board unusable, using default");
                self.default_board()
            }
        }
    }

    async fn try_load(&self) -> Result<Option<Board>> {
        let Some(contents) = self.storage.read_slot(&self.key).await? else {
            return Ok(None);
        };

        let board: Board = serde_json::from_str(&contents)?;
        board.validate()?;
        Ok(Some(board))
    }

    /// Serializes and writes the full board, replacing the slot's content
    pub async fn save(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string_pretty(board)?;
        self.storage.write_slot(&self.key, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, CardId, Column};
    use crate::storage::MemoryStorage;

    const KEY: &str = BoardConfig::DEFAULT_STORAGE_KEY;

    fn store_over(storage: &Arc<MemoryStorage>) -> PersistenceStore {
        PersistenceStore::new(storage.clone(), &BoardConfig::default())
    }

    fn sample_board() -> Board {
        Board::new(vec![
            Column::new("col-1", "To Do").with_cards(vec![
                Card::new(CardId::from("c1"), "Plan".to_string()),
                Card::new(CardId::from("c2"), "Build".to_string()),
            ]),
            Column::new("col-2", "Doing"),
        ])
    }

    #[tokio::test]
    async fn test_empty_slot_loads_default() {
        let storage = Arc::new(MemoryStorage::new());
        let board = store_over(&storage).load().await;

        assert_eq!(board, Board::default());
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_loads_default() {
        let storage = Arc::new(MemoryStorage::with_slot(KEY, "{not json"));
        assert_eq!(store_over(&storage).load().await, Board::default());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_default() {
        let storage = Arc::new(MemoryStorage::with_slot(KEY, r#"{"columns": 5}"#));
        assert_eq!(store_over(&storage).load().await, Board::default());
    }

    #[tokio::test]
    async fn test_invalid_board_loads_default() {
        let duplicate_ids = r#"{"columns":[
            {"id":"a","title":"A","cards":[{"id":"x","text":"one"}]},
            {"id":"b","title":"B","cards":[{"id":"x","text":"two"}]}
        ]}"#;
        let storage = Arc::new(MemoryStorage::with_slot(KEY, duplicate_ids));
        assert_eq!(store_over(&storage).load().await, Board::default());

        let blank_text = r#"{"columns":[
            {"id":"a","title":"A","cards":[{"id":"x","text":"   "}]}
        ]}"#;
        let storage = Arc::new(MemoryStorage::with_slot(KEY, blank_text));
        assert_eq!(store_over(&storage).load().await, Board::default());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_over(&storage);
        let board = sample_board();

        store.save(&board).await.unwrap();
        assert_eq!(store.load().await, board);

        // A second save replaces the slot entirely
        let emptied = Board::default();
        store.save(&emptied).await.unwrap();
        assert_eq!(store.load().await, emptied);
        assert_eq!(storage.write_count(), 2);
    }

    #[tokio::test]
    async fn test_reads_plain_compact_payload() {
        let payload = r#"{"columns":[{"id":"col-1","title":"To Do","cards":[{"id":"card-1-abc","text":"Hi"}]}]}"#;
        let storage = Arc::new(MemoryStorage::with_slot(KEY, payload));
        let board = store_over(&storage).load().await;

        assert_eq!(board.columns.len(), 1);
        assert_eq!(
            board.find_card(&CardId::from("card-1-abc")).map(|c| c.text.as_str()),
            Some("Hi")
        );
    }

    #[tokio::test]
    async fn test_custom_config_controls_key_and_default() {
        let config = BoardConfig::from_toml_str(
            r#"
            storage_key = "work"

            [[columns]]
            id = "only"
            title = "Only"
            "#,
        )
        .unwrap();
        let storage = Arc::new(MemoryStorage::new());
        let store = PersistenceStore::new(storage.clone(), &config);

        let board = store.load().await;
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.columns[0].title, "Only");

        store.save(&board).await.unwrap();
        assert!(storage.slot("work").is_some());
        assert!(storage.slot(KEY).is_none());
    }

    #[cfg(feature = "file-storage")]
    #[tokio::test]
    async fn test_round_trip_through_files() {
        use crate::storage::FileStorage;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let store = PersistenceStore::new(
            Arc::new(FileStorage::new(temp_dir.path())),
            &BoardConfig::default(),
        );
        let board = sample_board();

        store.save(&board).await.unwrap();

        let reopened = PersistenceStore::new(
            Arc::new(FileStorage::new(temp_dir.path())),
            &BoardConfig::default(),
        );
        assert_eq!(reopened.load().await, board);
    }
}
