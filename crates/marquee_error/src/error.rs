//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, SourceError, StorageError};

/// Every failure a marquee collaborator can report.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, StorageError, StorageErrorKind};
///
/// let storage = StorageError::new(StorageErrorKind::FileRead("favorites".to_string()));
/// let err: MarqueeError = storage.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// Movie source failure
    #[from(SourceError)]
    Source(SourceError),
    /// Local persistence failure
    #[from(StorageError)]
    Storage(StorageError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Marquee error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
