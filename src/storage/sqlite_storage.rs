use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

/// SQLite-backed slots kept in a single `slots(key, value)` table
pub struct SqliteStorage {
    connection: Mutex<Connection>,
}

impl SqliteStorage {
    /// Opens (or creates) a database file
    pub fn open(database_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_connection(Connection::open(database_path)?)
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS slots (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| BoardError::StorageError("sqlite connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self
            .lock()?
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<()> {
        self.lock()?
            .execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_slot_lifecycle() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.read_slot("board").await.unwrap().is_none());

        storage.write_slot("board", "first").await.unwrap();
        storage.write_slot("board", "second").await.unwrap();
        assert_eq!(
            storage.read_slot("board").await.unwrap().as_deref(),
            Some("second")
        );

        storage.remove_slot("board").await.unwrap();
        assert!(storage.read_slot("board").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_persists_across_connections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.db");

        SqliteStorage::open(&path)
            .unwrap()
            .write_slot("board", "{}")
            .await
            .unwrap();

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(
            reopened.read_slot("board").await.unwrap().as_deref(),
            Some("{}")
        );
    }
}
