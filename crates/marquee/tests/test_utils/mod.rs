//! Test utilities for facade tests.

use async_trait::async_trait;
use marquee::{
    FavoritesStore, FixtureSource, MarqueeResult, MemoryStore, Movie, MovieCatalog, MovieFacade,
    MovieId, MovieSource,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Bundled fixtures behind a call counter.
#[derive(Debug)]
pub struct CountingSource {
    inner: FixtureSource,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn bundled() -> Self {
        Self {
            inner: FixtureSource::bundled().expect("Bundled fixtures should parse"),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MovieSource for CountingSource {
    async fn fetch_top_rated(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.record();
        self.inner.fetch_top_rated(limit).await
    }

    async fn fetch_top_rated_chronological(&self, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.record();
        self.inner.fetch_top_rated_chronological(limit).await
    }

    async fn fetch_by_id(&self, id: MovieId) -> MarqueeResult<Option<Movie>> {
        self.record();
        self.inner.fetch_by_id(id).await
    }

    async fn search(&self, query: &str, limit: usize) -> MarqueeResult<Vec<Movie>> {
        self.record();
        self.inner.search(query, limit).await
    }

    fn source_name(&self) -> &'static str {
        "counting"
    }
}

/// Facade over counted bundled fixtures and the given store.
#[allow(dead_code)]
pub async fn create_test_facade(store: MemoryStore) -> (Arc<CountingSource>, MovieFacade) {
    let source = Arc::new(CountingSource::bundled());
    let catalog = Arc::new(MovieCatalog::new(source.clone()));
    let favorites = Arc::new(FavoritesStore::open(Arc::new(store)).await);
    (source, MovieFacade::new(catalog, favorites))
}
