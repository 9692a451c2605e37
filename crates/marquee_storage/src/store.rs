//! Storage trait definition.

use marquee_error::{JsonError, MarqueeResult, StorageError, StorageErrorKind};
use serde::{de::DeserializeOwned, Serialize};

/// Trait for durable key/value backends.
///
/// Values are JSON text. Implementations must make `set` atomic: a reader
/// sees either the old value or the new one, never a torn write.
#[async_trait::async_trait]
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`, `None` when nothing was stored.
    async fn get(&self, key: &str) -> MarqueeResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> MarqueeResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> MarqueeResult<()>;

    /// Backend name for logging (e.g., "filesystem", "memory").
    fn backend_name(&self) -> &'static str;
}

/// Reject keys that cannot be used as a single path component.
pub fn validate_key(key: &str) -> MarqueeResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into())
    }
}

/// Read and decode a JSON value. Undecodable content is an error.
pub async fn load_json<S, T>(store: &S, key: &str) -> MarqueeResult<Option<T>>
where
    S: LocalStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(JsonError::from)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Encode a value as JSON and store it.
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> MarqueeResult<()>
where
    S: LocalStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(JsonError::from)?;
    store.set(key, &raw).await
}
