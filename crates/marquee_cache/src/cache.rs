//! Cache entries and the catalog state snapshot.

use derive_getters::Getters;
use marquee_core::{Movie, MovieId, QueryKey};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How long a cached collection is served without refetching.
pub const TTL: Duration = Duration::from_secs(5 * 60);

/// A cached movie collection for one query shape.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    key: QueryKey,
    fetched_at: Instant,
    movies: Arc<Vec<Movie>>,
}

impl CacheEntry {
    /// Record a collection fetched just now.
    pub fn new(key: QueryKey, movies: Vec<Movie>) -> Self {
        Self {
            key,
            fetched_at: Instant::now(),
            movies: Arc::new(movies),
        }
    }

    /// Time since the collection was fetched.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    /// Check if this entry is still within the TTL.
    pub fn is_valid(&self) -> bool {
        self.age() < TTL
    }

    /// Get remaining time until the entry goes stale.
    pub fn time_remaining(&self) -> Option<Duration> {
        TTL.checked_sub(self.age())
    }
}

/// Snapshot of the catalog: cache entries plus the shared loading/error flags.
///
/// The flags are global rather than per query, so an error from one query
/// stays visible until the next successful fetch of any query clears it.
#[derive(Debug, Clone, Default, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct CatalogState {
    /// Cache entries keyed by query shape
    #[setters(skip)]
    entries: BTreeMap<QueryKey, Arc<CacheEntry>>,
    /// Whether a collection fetch is in flight
    loading: bool,
    /// Message describing the last failure
    #[setters(into)]
    error: Option<String>,
}

impl CatalogState {
    /// The entry for a query shape, fresh or stale.
    pub fn entry(&self, key: &QueryKey) -> Option<&Arc<CacheEntry>> {
        self.entries.get(key)
    }

    /// A copy of this state with `entry` installed, replacing any entry for its key.
    pub fn with_entry(&self, entry: CacheEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(entry.key().clone(), Arc::new(entry));
        Self {
            entries,
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// A copy of this state with no entries and the same flags.
    pub fn without_entries(&self) -> Self {
        Self {
            entries: BTreeMap::new(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// First cached movie with `id`, across all entries.
    pub fn find_movie(&self, id: MovieId) -> Option<&Movie> {
        self.entries
            .values()
            .flat_map(|entry| entry.movies().iter())
            .find(|movie| movie.id == id)
    }

    /// Every cached movie once, first occurrence wins.
    pub fn cached_movies(&self) -> Vec<&Movie> {
        let mut seen = HashSet::new();
        self.entries
            .values()
            .flat_map(|entry| entry.movies().iter())
            .filter(|movie| seen.insert(movie.id))
            .collect()
    }
}
