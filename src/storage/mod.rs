use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;
pub mod persistence;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use persistence::PersistenceStore;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Local key-value slots holding serialized values
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads a slot, returning `None` if nothing was ever written to it
    async fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the entire content of a slot
    async fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a slot; removing a missing slot is not an error
    async fn remove_slot(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Storage;
    use crate::error::{BoardError, Result};
    use async_trait::async_trait;

    /// Storage that reads as empty and rejects every write
    pub struct FailingStorage;

    #[async_trait]
    impl Storage for FailingStorage {
        async fn read_slot(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn write_slot(&self, _key: &str, _value: &str) -> Result<()> {
            Err(BoardError::StorageError("disk full".to_string()))
        }

        async fn remove_slot(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }
}
