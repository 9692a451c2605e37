//! Favorite movie ids, held in memory and mirrored to storage.

use derive_getters::Getters;
use marquee_core::{MovieId, StateCell};
use marquee_storage::{load_json, save_json, LocalStore};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio_stream::{Stream, StreamExt};

/// Storage key of the persisted favorite-id list.
pub const FAVORITES_KEY: &str = "favorites";

/// Error shown when the persisted favorites cannot be read.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load favorites";

/// Error shown when the favorites cannot be written.
pub const SAVE_ERROR_MESSAGE: &str = "Failed to save favorites";

/// Snapshot of the favorites: ids in canonical string form plus flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct FavoritesState {
    /// Canonical ids of every favorite movie
    #[setters(skip)]
    ids: BTreeSet<String>,
    /// Whether the initial load is in flight
    loading: bool,
    /// Message describing the last storage failure
    #[setters(into)]
    error: Option<String>,
}

impl FavoritesState {
    /// Whether `id` is a favorite in this snapshot.
    pub fn contains(&self, id: MovieId) -> bool {
        self.ids.contains(&id.canonical())
    }

    /// A copy of this state holding exactly `ids`.
    pub fn with_ids(&self, ids: BTreeSet<String>) -> Self {
        Self {
            ids,
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    fn with_id(&self, id: String, present: bool) -> Self {
        let mut ids = self.ids.clone();
        if present {
            ids.insert(id);
        } else {
            ids.remove(&id);
        }
        self.with_ids(ids)
    }
}

/// Owns the set of favorite movie ids.
///
/// The in-memory set is the optimistic source of truth. Every mutation
/// replaces the whole set, then writes the full id list to storage; a failed
/// write sets the error flag but the change stands.
///
/// Writes are serialized and each one saves the set current when it starts,
/// so storage never ends up behind the in-memory set.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_prefs::FavoritesStore;
///
/// let favorites = FavoritesStore::open(store).await;
/// let added = favorites.toggle_favorite(MovieId::from(278)).await;
/// assert!(added);
/// assert!(favorites.is_favorite_sync(MovieId::from(278)));
/// ```
pub struct FavoritesStore {
    store: Arc<dyn LocalStore>,
    state: StateCell<FavoritesState>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("store", &self.store.backend_name())
            .field("state", &self.state)
            .finish()
    }
}

impl FavoritesStore {
    /// Create a store with an empty set. Call [`load`](Self::load) to read storage.
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            store,
            state: StateCell::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store and load the persisted favorites.
    pub async fn open(store: Arc<dyn LocalStore>) -> Self {
        let favorites = Self::new(store);
        favorites.load().await;
        favorites
    }

    /// Read the persisted id list into memory.
    ///
    /// Missing data leaves the set empty. Unreadable or corrupted data sets
    /// the error flag and leaves the set as it was.
    #[tracing::instrument(skip(self), fields(backend = self.store.backend_name()))]
    pub async fn load(&self) {
        self.state.update(|state| state.clone().with_loading(true));

        match load_json::<_, Vec<String>>(self.store.as_ref(), FAVORITES_KEY).await {
            Ok(Some(ids)) => {
                tracing::info!(count = ids.len(), "Loaded favorites");
                self.state.update(|state| {
                    state
                        .with_ids(ids.into_iter().collect())
                        .with_loading(false)
                        .with_error(None::<String>)
                });
            }
            Ok(None) => {
                tracing::debug!("No persisted favorites");
                self.state.update(|state| {
                    state
                        .clone()
                        .with_loading(false)
                        .with_error(None::<String>)
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read favorites");
                self.state.update(|state| {
                    state
                        .clone()
                        .with_loading(false)
                        .with_error(LOAD_ERROR_MESSAGE.to_string())
                });
            }
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<FavoritesState> {
        self.state.snapshot()
    }

    /// Receiver notified on every state replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<FavoritesState>> {
        self.state.subscribe()
    }

    /// Whether `id` is a favorite right now. No I/O.
    pub fn is_favorite_sync(&self, id: MovieId) -> bool {
        self.state.snapshot().contains(id)
    }

    /// Favorite status of `id`: the current value, then one per state change.
    pub fn is_favorite(&self, id: MovieId) -> impl Stream<Item = bool> + Send + 'static {
        self.state.watch().map(move |state| state.contains(id))
    }

    /// Canonical ids of every favorite, in sorted order.
    pub fn get_favorite_ids(&self) -> Vec<String> {
        self.state.snapshot().ids().iter().cloned().collect()
    }

    /// Number of favorites.
    pub fn favorites_count(&self) -> usize {
        self.state.snapshot().ids().len()
    }

    /// Flip the favorite status of `id` and persist. Returns the new status.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn toggle_favorite(&self, id: MovieId) -> bool {
        let key = id.canonical();
        let state = self.state.update(|state| {
            let present = !state.ids().contains(&key);
            state.with_id(key.clone(), present)
        });
        let now_favorite = state.ids().contains(&key);
        tracing::debug!(now_favorite, "Toggled favorite");
        self.persist().await;
        now_favorite
    }

    /// Mark `id` as a favorite and persist.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn add_favorite(&self, id: MovieId) {
        self.state.update(|state| state.with_id(id.canonical(), true));
        self.persist().await;
    }

    /// Unmark `id` as a favorite and persist.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn remove_favorite(&self, id: MovieId) {
        self.state.update(|state| state.with_id(id.canonical(), false));
        self.persist().await;
    }

    /// Drop every favorite and persist the empty list.
    #[tracing::instrument(skip(self))]
    pub async fn clear_favorites(&self) {
        self.state.update(|state| state.with_ids(BTreeSet::new()));
        self.persist().await;
    }

    /// Write the current id list. Failures only set the error flag.
    async fn persist(&self) {
        let _writing = self.write_lock.lock().await;
        let state = self.state.snapshot();
        match save_json(self.store.as_ref(), FAVORITES_KEY, state.ids()).await {
            Ok(()) => {
                tracing::debug!(count = state.ids().len(), "Persisted favorites");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist favorites");
                self.state.update(|current| {
                    current
                        .clone()
                        .with_error(SAVE_ERROR_MESSAGE.to_string())
                });
            }
        }
    }
}
