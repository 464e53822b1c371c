use crate::{
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

/// File-based storage: one `<key>.json` file per slot under a root directory
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const BOARD_DIR: &'static str = ".corkboard";
    const SLOT_EXTENSION: &'static str = "json";

    /// Creates a FileStorage keeping its slots in `<project_root>/.corkboard`
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self::at(project_root.as_ref().join(Self::BOARD_DIR))
    }

    /// Creates a FileStorage keeping its slots directly in `dir`
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            root_path: dir.into(),
        }
    }

    /// Returns the directory holding the slot files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(BoardError::StorageError(format!(
                "invalid slot key '{}'",
                key
            )));
        }
        Ok(self
            .root_path
            .join(format!("{}.{}", key, Self::SLOT_EXTENSION)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.slot_file(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.slot_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(file_path, value).await?;
        Ok(())
    }

    async fn remove_slot(&self, key: &str) -> Result<()> {
        let file_path = self.slot_file(key)?;

        match fs::remove_file(file_path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
