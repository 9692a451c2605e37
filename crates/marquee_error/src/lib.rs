//! Error types for the marquee movie catalog.
//!
//! This crate provides the foundation error types used by every marquee crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Collaborators (movie sources, local stores) report failures with these
//! types. The catalog, favorites and facade layers never hand them to the
//! presentation layer; they turn them into an error message on their state.
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, SourceError, SourceErrorKind};
//!
//! fn fetch_top_rated() -> MarqueeResult<Vec<u64>> {
//!     Err(SourceError::new(SourceErrorKind::Unavailable("offline".to_string())))?
//! }
//!
//! assert!(fetch_top_rated().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod source;
mod storage;

pub use config::ConfigError;
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use json::JsonError;
pub use source::{SourceError, SourceErrorKind};
pub use storage::{StorageError, StorageErrorKind};
