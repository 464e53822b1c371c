use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard,
    },
};

/// In-process storage, useful for headless boards and tests.
///
/// Counts successful writes so callers can observe whether a save happened.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    /// Creates a new storage with no slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage with one slot pre-filled (not counted as a write)
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            slots: Mutex::new(HashMap::from([(key.into(), value.into())])),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current raw content of a slot
    pub fn slot(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|slots| slots.get(key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| BoardError::StorageError("memory storage lock poisoned".to_string()))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
