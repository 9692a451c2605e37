//! Movie records and their favorite-annotated form.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

/// Numeric movie identifier.
///
/// Favorites are persisted by the canonical decimal string form, so the
/// storage format does not depend on how the number was represented.
///
/// # Examples
///
/// ```
/// use marquee_core::MovieId;
///
/// let id = MovieId::from(278);
/// assert_eq!(id.canonical(), "278");
/// assert_eq!("278".parse::<MovieId>().unwrap(), id);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    /// Raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// String form used as the persisted favorite key.
    pub fn canonical(&self) -> String {
        self.0.to_string()
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(MovieId)
    }
}

/// A movie as produced by a movie source.
///
/// Movies are never mutated once produced; enrichment wraps them in an
/// [`EnrichedMovie`] instead.
///
/// # Examples
///
/// ```
/// use marquee_core::MovieBuilder;
///
/// let movie = MovieBuilder::default()
///     .id(238u64)
///     .title("The Godfather")
///     .release_date("1972-03-14")
///     .vote_average(8.7)
///     .build()
///     .unwrap();
///
/// assert!(movie.matches("godfather"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default, setter(into))]
pub struct Movie {
    /// Identity of the movie
    pub id: MovieId,
    /// Localized title
    pub title: String,
    /// Title in the original language
    #[serde(default)]
    pub original_title: String,
    /// Synopsis
    #[serde(default)]
    pub overview: String,
    /// ISO date string (`YYYY-MM-DD`)
    #[serde(default)]
    pub release_date: String,
    /// Poster image path relative to the image host
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub poster_path: Option<String>,
    /// Backdrop image path relative to the image host
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub backdrop_path: Option<String>,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes behind the rating
    #[serde(default)]
    pub vote_count: u64,
    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,
    /// Trailer key or URL
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub trailer: Option<String>,
}

impl Movie {
    /// Case-insensitive substring match against title, original title and overview.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        [&self.title, &self.original_title, &self.overview]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Attach a favorite flag, producing a new value.
    pub fn enrich(self, is_favorite: bool) -> EnrichedMovie {
        EnrichedMovie {
            movie: self,
            is_favorite,
        }
    }
}

/// A movie annotated with the favorite status it had when it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    /// The underlying movie
    #[serde(flatten)]
    pub movie: Movie,
    /// Whether the movie was a favorite at enrichment time
    pub is_favorite: bool,
}

impl EnrichedMovie {
    /// Pair a movie with its favorite status.
    pub fn new(movie: Movie, is_favorite: bool) -> Self {
        Self { movie, is_favorite }
    }
}

impl Deref for EnrichedMovie {
    type Target = Movie;

    fn deref(&self) -> &Movie {
        &self.movie
    }
}
