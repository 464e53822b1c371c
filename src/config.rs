//! Board configuration, optionally read from a TOML file.
//!
//! ```toml
//! storage_key = "my-board"
//!
//! [[columns]]
//! id = "backlog"
//! title = "Backlog"
//! ```

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// Id and title of a column the default board starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: String,
    pub title: String,
}

impl ColumnSeed {
    /// Creates a new column seed
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Board settings; every field falls back to its default when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Name of the persistence slot holding the serialized board
    pub storage_key: String,
    /// Columns of the board used when nothing has been persisted yet
    pub columns: Vec<ColumnSeed>,
}

impl BoardConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "trello-board-state";

    /// Parses and validates a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&contents)
    }

    /// Rejects a blank storage key and blank or duplicate column ids
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "storage_key must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for seed in &self.columns {
            if seed.id.trim().is_empty() {
                return Err(BoardError::ConfigError(format!(
                    "column '{}' has an empty id",
                    seed.title
                )));
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column id '{}'",
                    seed.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            columns: vec![
                ColumnSeed::new("col-1", "To Do"),
                ColumnSeed::new("col-2", "In Progress"),
                ColumnSeed::new("col-3", "Done"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "trello-board-state");
        assert_eq!(config.columns.len(), 3);
        assert_eq!(config.columns[1].title, "In Progress");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BoardConfig::from_toml_str("storage_key = \"personal\"").unwrap();
        assert_eq!(config.storage_key, "personal");
        assert_eq!(config.columns, BoardConfig::default().columns);
    }

    #[test]
    fn test_custom_columns() {
        let config = BoardConfig::from_toml_str(
            r#"
            [[columns]]
            id = "backlog"
            title = "Backlog"

            [[columns]]
            id = "shipped"
            title = "Shipped"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_key, BoardConfig::DEFAULT_STORAGE_KEY);
        assert_eq!(
            config.columns,
            vec![
                ColumnSeed::new("backlog", "Backlog"),
                ColumnSeed::new("shipped", "Shipped"),
            ]
        );
    }

    #[test]
    fn test_duplicate_column_ids_rejected() {
        let result = BoardConfig::from_toml_str(
            r#"
            [[columns]]
            id = "a"
            title = "First"

            [[columns]]
            id = "a"
            title = "Second"
            "#,
        );
        assert!(matches!(result, Err(BoardError::ConfigError(_))));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let result = BoardConfig::from_toml_str("storage_key = \"  \"");
        assert!(matches!(result, Err(BoardError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = BoardConfig::from_toml_str("columns = 3");
        assert!(matches!(result, Err(BoardError::ConfigParseError(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.toml");
        tokio::fs::write(&path, "storage_key = \"from-file\"\n")
            .await
            .unwrap();

        let config = BoardConfig::load(&path).await.unwrap();
        assert_eq!(config.storage_key, "from-file");
    }
}
