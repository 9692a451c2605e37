//! Scripted movie source for testing the catalog without a backend.

use async_trait::async_trait;
use marquee_core::{Movie, MovieId};
use marquee_error::{MarqueeResult, SourceError, SourceErrorKind};
use marquee_interface::MovieSource;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Movie source over a fixed list that counts calls and can be switched to fail.
///
/// Calls are counted on entry, then wait at a gate that [`hold`](Self::hold)
/// can keep shut.
#[derive(Debug, Default)]
pub struct MockMovieSource {
    movies: Vec<Movie>,
    failing: AtomicBool,
    top_rated_calls: AtomicUsize,
    chronological_calls: AtomicUsize,
    by_id_calls: AtomicUsize,
    search_calls: AtomicUsize,
    gate: Arc<Mutex<()>>,
}

#[allow(dead_code)]
impl MockMovieSource {
    /// Source serving `movies` in the given (ranked) order.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            ..Default::default()
        }
    }

    /// Make every later call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Keep every call waiting until the returned guard is dropped.
    pub async fn hold(&self) -> OwnedMutexGuard<()> {
        self.gate.clone().lock_owned().await
    }

    pub fn top_rated_calls(&self) -> usize {
        self.top_rated_calls.load(Ordering::SeqCst)
    }

    pub fn chronological_calls(&self) -> usize {
        self.chronological_calls.load(Ordering::SeqCst)
    }

    pub fn by_id_calls(&self) -> usize {
        self.by_id_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Total calls across every operation.
    pub fn total_calls(&self) -> usize {
        self.top_rated_calls()
            + self.chronological_calls()
            + self.by_id_calls()
            + self.search_calls()
    }

    async fn check(&self) -> MarqueeResult<()> {
        let _open = self.gate.lock().await;
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::new(SourceErrorKind::Unavailable(
                "mock source offline".to_string(),
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl MovieSource for MockMovieSource {
    async fn fetch_top_rated(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.top_rated_calls.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        Ok(self.movies.iter().take(limit).cloned().collect())
    }

    async fn fetch_top_rated_chronological(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.chronological_calls.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        let mut movies: Vec<Movie> = self.movies.iter().take(limit).cloned().collect();
        movies.sort_by(|a, b| a.release_date.cmp(&b.release_date));
        Ok(movies)
    }

    async fn fetch_by_id(&self, id: MovieId) -> MarqueeResult<Option<Movie>> {
        self.by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn search(&self, query: &str, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.check().await?;
        Ok(self
            .movies
            .iter()
            .filter(|m| m.matches(query))
            .take(limit)
            .cloned()
            .collect())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
