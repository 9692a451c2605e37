//! Movie source error types.

/// Kinds of movie source failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SourceErrorKind {
    /// The source could not be reached or refused the request
    #[display("Movie source unavailable: {}", _0)]
    Unavailable(String),
    /// The source does not support the requested query
    #[display("Query not supported by movie source: {}", _0)]
    NotSupported(String),
    /// The source answered with data that could not be understood
    #[display("Malformed movie data: {}", _0)]
    Malformed(String),
}

/// Movie source error with location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{SourceError, SourceErrorKind};
///
/// let err = SourceError::new(SourceErrorKind::Unavailable("timeout".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The kind of error that occurred
    pub kind: SourceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SourceError {
    /// Create a new source error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
