//! Durable key/value persistence for marquee.
//!
//! Preferences (favorite ids, theme) are stored as JSON text under short
//! string keys. The store survives restarts; any operation may fail because
//! storage is disabled, out of quota or holds corrupted content.
//!
//! # Example
//!
//! ```rust
//! use marquee_storage::{load_json, save_json, LocalStore, MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! save_json(&store, "favorites", &vec!["278".to_string()]).await?;
//!
//! let ids: Option<Vec<String>> = load_json(&store, "favorites").await?;
//! assert_eq!(ids, Some(vec!["278".to_string()]));
//! # Ok(())
//! # }
//! ```

mod filesystem;
mod memory;
mod store;

pub use filesystem::FileSystemStore;
pub use marquee_error::{StorageError, StorageErrorKind};
pub use memory::MemoryStore;
pub use store::{load_json, save_json, validate_key, LocalStore};
