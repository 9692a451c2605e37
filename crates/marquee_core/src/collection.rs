//! Collection kinds and the cache keys derived from them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which collection of movies a query asks for.
///
/// Unrecognized kinds are kept verbatim so they cache under their own key,
/// but they are served with top-rated behaviour.
///
/// # Examples
///
/// ```
/// use marquee_core::CollectionKind;
///
/// assert_eq!("top-rated".parse::<CollectionKind>().unwrap(), CollectionKind::TopRated);
/// assert_eq!(CollectionKind::from("trending").to_string(), "trending");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKind {
    /// Highest rated first
    TopRated,
    /// The top-rated slice ordered by release date
    Chronological,
    /// Any other kind, served like [`CollectionKind::TopRated`]
    Other(String),
}

impl CollectionKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            CollectionKind::TopRated => "top-rated",
            CollectionKind::Chronological => "chronological",
            CollectionKind::Other(name) => name,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "top-rated" => CollectionKind::TopRated,
            "chronological" => CollectionKind::Chronological,
            other => CollectionKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for CollectionKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

/// Shape of a cacheable query: collection kind plus limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_getters::Getters)]
pub struct QueryKey {
    kind: CollectionKind,
    limit: usize,
}

impl QueryKey {
    /// Build the key for a kind and limit.
    pub fn new(kind: CollectionKind, limit: usize) -> Self {
        Self { kind, limit }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.limit)
    }
}
