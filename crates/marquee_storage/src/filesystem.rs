//! Filesystem-based key/value storage.
//!
//! Each key is one JSON file under the base directory.

use crate::{validate_key, LocalStore};
use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence for temp file names, unique per process.
static WRITE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Filesystem storage backend.
///
/// Stores each value at `{base_path}/{key}.json`. Every write goes to its own
/// temp file that is renamed into place, so overlapping writes to one key
/// never share bytes; the last rename wins.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MarqueeResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem store");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> MarqueeResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.json")))
    }

    /// Temp file for one write of an already validated key.
    fn temp_path_for(&self, key: &str) -> PathBuf {
        let sequence = WRITE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.base_path
            .join(format!("{key}.json.{}.{sequence}.tmp", std::process::id()))
    }
}

#[async_trait::async_trait]
impl LocalStore for FileSystemStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> MarqueeResult<Option<String>> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                tracing::debug!(path = %path.display(), size = value.len(), "Read stored value");
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self, value), fields(size = value.len()))]
    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()> {
        let path = self.path_for(key)?;

        let temp_path = self.temp_path_for(key);
        if let Err(e) = tokio::fs::write(&temp_path, value).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
            .into());
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::debug!(path = %path.display(), "Stored value");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, key: &str) -> MarqueeResult<()> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Removed stored value");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
