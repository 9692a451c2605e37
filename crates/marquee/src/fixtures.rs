//! Movie source backed by a static JSON catalog.

use async_trait::async_trait;
use marquee_core::{Movie, MovieId};
use marquee_error::{JsonError, MarqueeResult, SourceError, SourceErrorKind};
use marquee_interface::MovieSource;
use std::path::Path;

/// Catalog bundled with the binary.
const BUNDLED_MOVIES: &str = include_str!("../fixtures/movies.json");

/// In-memory [`MovieSource`] over a fixed list of movies.
///
/// Stands in for a remote catalog API. Ranking is by `vote_average`,
/// highest first; ties keep catalog order.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    movies: Vec<Movie>,
}

impl FixtureSource {
    /// Source over `movies`.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Source over the catalog bundled with the binary.
    pub fn bundled() -> MarqueeResult<Self> {
        Self::from_json(BUNDLED_MOVIES)
    }

    /// Parse a JSON array of movies.
    pub fn from_json(json: &str) -> MarqueeResult<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json).map_err(JsonError::from)?;
        tracing::debug!(count = movies.len(), "Parsed movie fixtures");
        Ok(Self::new(movies))
    }

    /// Read a JSON array of movies from `path`.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SourceError::new(SourceErrorKind::Unavailable(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Self::from_json(&json)
    }

    /// Every movie in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn ranked(&self, limit: usize) -> Vec<Movie> {
        let mut movies = self.movies.clone();
        movies.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
        movies.truncate(limit);
        movies
    }
}

#[async_trait]
impl MovieSource for FixtureSource {
    async fn fetch_top_rated(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        Ok(self.ranked(limit))
    }

    async fn fetch_top_rated_chronological(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        let mut movies = self.ranked(limit);
        movies.sort_by(|a, b| a.release_date.cmp(&b.release_date));
        Ok(movies)
    }

    async fn fetch_by_id(&self, id: MovieId) -> MarqueeResult<Option<Movie>> {
        Ok(self.movies.iter().find(|movie| movie.id == id).cloned())
    }

    async fn search(&self, query: &str, limit: usize) -> MarqueeResult<Vec<Movie>> {
        Ok(self
            .ranked(self.movies.len())
            .into_iter()
            .filter(|movie| movie.matches(query))
            .take(limit)
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "fixtures"
    }
}
