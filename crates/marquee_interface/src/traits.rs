//! Trait definitions for movie sources.

use async_trait::async_trait;
use marquee_core::{Movie, MovieId};
use marquee_error::MarqueeResult;

/// Supplies raw movie records.
///
/// Any call may fail; callers treat every failure the same way regardless
/// of cause. A missing movie is `Ok(None)`, not an error.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Highest rated movies, best first, at most `limit`.
    async fn fetch_top_rated(&self, limit: usize) -> MarqueeResult<Vec<Movie>>;

    /// The top-rated slice of `limit` movies ordered by release date, oldest first.
    async fn fetch_top_rated_chronological(&self, limit: usize) -> MarqueeResult<Vec<Movie>>;

    /// A single movie by id.
    async fn fetch_by_id(&self, id: MovieId) -> MarqueeResult<Option<Movie>>;

    /// Movies matching a free-text query, at most `limit`.
    async fn search(&self, query: &str, limit: usize) -> MarqueeResult<Vec<Movie>>;

    /// Source name for logging (e.g., "fixtures", "tmdb").
    fn source_name(&self) -> &'static str;
}
