//! The cache & fetch coordinator.

use crate::{CacheEntry, CatalogState};
use marquee_core::{CollectionKind, Movie, MovieId, QueryKey, StateCell};
use marquee_error::MarqueeResult;
use marquee_interface::MovieSource;
use std::sync::Arc;
use tokio::sync::watch;

/// Error shown when a collection fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load movies";

/// Error shown when a single-movie lookup fails.
pub const LOOKUP_ERROR_MESSAGE: &str = "Failed to load movie";

/// Error shown when a live search fails.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to search movies";

/// Cache & fetch coordinator over a [`MovieSource`].
///
/// Collections are cached per [`QueryKey`] and served without touching the
/// source while fresh. Failures never reach the caller: they degrade to the
/// last cached copy (or nothing) and set the shared error flag.
///
/// Concurrent identical requests are not coalesced; each fetches and the
/// last one to finish installs its entry.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_cache::MovieCatalog;
/// use marquee_core::CollectionKind;
///
/// let catalog = MovieCatalog::new(source);
/// let top = catalog.get_movies(CollectionKind::TopRated, 20).await;
/// let again = catalog.get_movies(CollectionKind::TopRated, 20).await; // served from cache
/// ```
pub struct MovieCatalog {
    source: Arc<dyn MovieSource>,
    state: StateCell<CatalogState>,
}

impl std::fmt::Debug for MovieCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieCatalog")
            .field("source", &self.source.source_name())
            .field("state", &self.state)
            .finish()
    }
}

impl MovieCatalog {
    /// Create a catalog with an empty cache.
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        tracing::debug!(source = source.source_name(), "Creating new MovieCatalog");
        Self {
            source,
            state: StateCell::default(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<CatalogState> {
        self.state.snapshot()
    }

    /// Receiver notified on every state replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CatalogState>> {
        self.state.subscribe()
    }

    /// Movies for a collection kind, at most `limit`.
    ///
    /// Served from cache while the entry for `(kind, limit)` is fresh.
    /// Otherwise fetched and cached; on failure the previous entry (even
    /// stale) is returned, or nothing.
    #[tracing::instrument(skip(self), fields(kind = %kind))]
    pub async fn get_movies(&self, kind: CollectionKind, limit: usize) -> Vec<Movie> {
        let key = QueryKey::new(kind, limit);

        if let Some(entry) = self.state.snapshot().entry(&key)
            && entry.is_valid()
        {
            tracing::debug!(
                key = %key,
                time_remaining = ?entry.time_remaining(),
                "Cache hit"
            );
            return entry.movies().to_vec();
        }

        tracing::debug!(key = %key, "Cache miss, fetching");
        self.state.update(|state| state.clone().with_loading(true));

        match self.fetch_collection(key.kind(), limit).await {
            Ok(movies) => {
                let entry = CacheEntry::new(key.clone(), movies.clone());
                self.state.update(|state| {
                    state
                        .with_entry(entry)
                        .with_loading(false)
                        .with_error(None::<String>)
                });
                tracing::info!(key = %key, count = movies.len(), "Cached movie collection");
                movies
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Movie fetch failed");
                let state = self.state.update(|state| {
                    state
                        .clone()
                        .with_loading(false)
                        .with_error(FETCH_ERROR_MESSAGE.to_string())
                });
                match state.entry(&key) {
                    Some(stale) => {
                        tracing::info!(
                            key = %key,
                            age = ?stale.age(),
                            "Serving cached movies after fetch failure"
                        );
                        stale.movies().to_vec()
                    }
                    None => Vec::new(),
                }
            }
        }
    }

    /// A single movie, from any cache entry first, else from the source.
    ///
    /// Source lookups are not written back to the cache. A movie the source
    /// does not know is `None`; a failed lookup is also `None` with the
    /// error flag set. A lookup the source answers clears the error flag.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn get_movie_by_id(&self, id: MovieId) -> Option<Movie> {
        if let Some(movie) = self.state.snapshot().find_movie(id) {
            tracing::debug!("Movie found in cache");
            return Some(movie.clone());
        }

        match self.source.fetch_by_id(id).await {
            Ok(found) => {
                tracing::debug!(found = found.is_some(), "Fetched movie from source");
                self.clear_error();
                found
            }
            Err(e) => {
                tracing::warn!(error = %e, "Movie lookup failed");
                self.state.update(|state| {
                    state
                        .clone()
                        .with_error(LOOKUP_ERROR_MESSAGE.to_string())
                });
                None
            }
        }
    }

    /// Movies matching `query`, at most `limit`.
    ///
    /// Cached collections are searched first; the source is only asked when
    /// they hold fewer than `limit` matches. If that live search fails the
    /// cached matches are returned; if it succeeds the error flag is cleared.
    #[tracing::instrument(skip(self))]
    pub async fn search_movies(&self, query: &str, limit: usize) -> Vec<Movie> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let snapshot = self.state.snapshot();
        let mut matches: Vec<Movie> = snapshot
            .cached_movies()
            .into_iter()
            .filter(|movie| movie.matches(query))
            .cloned()
            .collect();

        if matches.len() >= limit {
            tracing::debug!(matches = matches.len(), "Search served from cache");
            matches.truncate(limit);
            return matches;
        }

        match self.source.search(query, limit).await {
            Ok(mut found) => {
                found.truncate(limit);
                tracing::debug!(matches = found.len(), "Search served from source");
                self.clear_error();
                found
            }
            Err(e) => {
                tracing::warn!(error = %e, cached = matches.len(), "Live search failed");
                self.state.update(|state| {
                    state
                        .clone()
                        .with_error(SEARCH_ERROR_MESSAGE.to_string())
                });
                matches.truncate(limit);
                matches
            }
        }
    }

    fn clear_error(&self) {
        if self.state.snapshot().error().is_some() {
            self.state.update(|state| state.clone().with_error(None::<String>));
        }
    }

    /// Drop every cache entry. Loading and error flags are untouched.
    pub fn clear_cache(&self) {
        let state = self.state.update(CatalogState::without_entries);
        tracing::info!(loading = state.loading(), "Cleared movie cache");
    }

    async fn fetch_collection(
        &self,
        kind: &CollectionKind,
        limit: usize,
    ) -> MarqueeResult<Vec<Movie>> {
        match kind {
            CollectionKind::Chronological => {
                self.source.fetch_top_rated_chronological(limit).await
            }
            CollectionKind::TopRated | CollectionKind::Other(_) => {
                self.source.fetch_top_rated(limit).await
            }
        }
    }
}
