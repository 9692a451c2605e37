//! In-memory key/value storage.
//!
//! Clones share the same map, so a "fresh" store built from a clone sees
//! everything written before. Useful for tests and for running without a
//! writable data directory.

use crate::{validate_key, LocalStore};
use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Enable or disable the store; a disabled store fails every call.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    fn ensure_available(&self) -> MarqueeResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::new(StorageErrorKind::Unavailable(
                "memory store disabled".to_string(),
            ))
            .into())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LocalStore for MemoryStore {
    async fn get(&self, key: &str) -> MarqueeResult<Option<String>> {
        self.ensure_available()?;
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()> {
        self.ensure_available()?;
        validate_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> MarqueeResult<()> {
        self.ensure_available()?;
        validate_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
