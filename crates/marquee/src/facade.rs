//! The single interface the presentation layer talks to.

use marquee_cache::{CatalogState, MovieCatalog};
use marquee_core::{group_by_decade, CollectionKind, EnrichedMovie, Movie, MovieId};
use marquee_prefs::{FavoritesState, FavoritesStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::Stream;

/// Size of the home page collection.
pub const HOME_LIMIT: usize = 20;

/// Limit used when a query needs practically the whole catalog.
pub const CATALOG_LIMIT: usize = 1000;

/// Composes catalog results with favorite status.
///
/// Every returned movie carries the favorite flag it had when the result
/// was produced. Results are not re-tagged when favorites change later;
/// calling again reflects the latest set.
///
/// # Example
///
/// ```rust,ignore
/// use marquee::{FixtureSource, MovieFacade};
///
/// let facade = MovieFacade::new(catalog, favorites);
/// facade.toggle_movie_favorite(MovieId::from(278)).await;
///
/// for movie in facade.get_favorite_movies().await {
///     assert!(movie.is_favorite);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MovieFacade {
    catalog: Arc<MovieCatalog>,
    favorites: Arc<FavoritesStore>,
}

impl MovieFacade {
    /// Create a facade over an existing catalog and favorites store.
    pub fn new(catalog: Arc<MovieCatalog>, favorites: Arc<FavoritesStore>) -> Self {
        Self { catalog, favorites }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Arc<MovieCatalog> {
        &self.catalog
    }

    /// The underlying favorites store.
    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    /// Top rated movies for the home page.
    #[tracing::instrument(skip(self))]
    pub async fn get_home_movies(&self) -> Vec<EnrichedMovie> {
        let movies = self
            .catalog
            .get_movies(CollectionKind::TopRated, HOME_LIMIT)
            .await;
        self.enrich(movies)
    }

    /// The whole catalog grouped by decade, each group oldest first.
    ///
    /// Keys sort ascending; use [`decades_descending`](marquee_core::decades_descending)
    /// for newest-first display.
    #[tracing::instrument(skip(self))]
    pub async fn get_movies_by_decades(&self) -> BTreeMap<String, Vec<EnrichedMovie>> {
        let movies = self
            .catalog
            .get_movies(CollectionKind::TopRated, CATALOG_LIMIT)
            .await;
        let groups = group_by_decade(self.enrich(movies));
        tracing::debug!(decades = groups.len(), "Grouped movies by decade");
        groups
    }

    /// Every favorite movie found in the catalog.
    ///
    /// Returns immediately without touching the catalog when there are no
    /// favorites.
    #[tracing::instrument(skip(self))]
    pub async fn get_favorite_movies(&self) -> Vec<EnrichedMovie> {
        let favorites = self.favorites.state();
        if favorites.ids().is_empty() {
            return Vec::new();
        }

        self.catalog
            .get_movies(CollectionKind::TopRated, CATALOG_LIMIT)
            .await
            .into_iter()
            .filter(|movie| favorites.contains(movie.id))
            .map(|movie| movie.enrich(true))
            .collect()
    }

    /// A single movie with its favorite status, `None` when it does not exist.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn get_movie_by_id(&self, id: MovieId) -> Option<EnrichedMovie> {
        let movie = self.catalog.get_movie_by_id(id).await?;
        let is_favorite = self.favorites.is_favorite_sync(id);
        Some(movie.enrich(is_favorite))
    }

    /// Movies matching `query` with their favorite status.
    #[tracing::instrument(skip(self))]
    pub async fn search_movies(&self, query: &str, limit: usize) -> Vec<EnrichedMovie> {
        let movies = self.catalog.search_movies(query, limit).await;
        self.enrich(movies)
    }

    /// Flip the favorite status of `id`. Returns the new status.
    pub async fn toggle_movie_favorite(&self, id: MovieId) -> bool {
        self.favorites.toggle_favorite(id).await
    }

    /// Whether `id` is a favorite right now.
    pub fn is_movie_favorite(&self, id: MovieId) -> bool {
        self.favorites.is_favorite_sync(id)
    }

    /// Favorite status of `id`, updated on every favorites change.
    pub fn watch_movie_favorite(&self, id: MovieId) -> impl Stream<Item = bool> + Send + 'static {
        self.favorites.is_favorite(id)
    }

    /// Receiver for catalog loading/error/cache changes.
    pub fn catalog_state(&self) -> watch::Receiver<Arc<CatalogState>> {
        self.catalog.subscribe()
    }

    /// Receiver for favorites changes.
    pub fn favorites_state(&self) -> watch::Receiver<Arc<FavoritesState>> {
        self.favorites.subscribe()
    }

    /// Drop every cached collection.
    pub fn clear_cache(&self) {
        self.catalog.clear_cache();
    }

    /// Tag movies against one favorites snapshot.
    fn enrich(&self, movies: Vec<Movie>) -> Vec<EnrichedMovie> {
        let favorites = self.favorites.state();
        movies
            .into_iter()
            .map(|movie| {
                let is_favorite = favorites.contains(movie.id);
                movie.enrich(is_favorite)
            })
            .collect()
    }
}
