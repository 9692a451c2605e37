//! Marquee - movie catalog with cached fetching and local favorites
//!
//! Marquee browses a catalog of movies, groups them by release decade and
//! keeps a locally persisted set of favorites. The interesting part is the
//! layer between the presentation and the movie source:
//!
//! - **Catalog**: memoizes fetched collections for five minutes and falls
//!   back to stale data when the source fails
//! - **Favorites**: an in-memory id set mirrored to local storage
//! - **Facade**: annotates catalog results with favorite status
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marquee::{FavoritesStore, FixtureSource, MemoryStore, MovieCatalog, MovieFacade};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(MovieCatalog::new(Arc::new(FixtureSource::bundled()?)));
//! let favorites = Arc::new(FavoritesStore::open(Arc::new(MemoryStore::new())).await);
//! let facade = MovieFacade::new(catalog, favorites);
//!
//! for movie in facade.get_home_movies().await {
//!     println!("{} ({})", movie.title, movie.is_favorite);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `marquee_error` - Error types
//! - `marquee_core` - Movie types, decade grouping, formatting, observable state
//! - `marquee_interface` - `MovieSource` trait
//! - `marquee_storage` - `LocalStore` trait with filesystem and memory backends
//! - `marquee_cache` - `MovieCatalog` cache & fetch coordinator
//! - `marquee_prefs` - `FavoritesStore` and `ThemeStore`
//!
//! This crate (`marquee`) adds the facade, the fixture source and
//! configuration, and re-exports everything for convenience.

mod config;
mod facade;
mod fixtures;

pub use config::{MarqueeConfig, DEFAULT_LOG_FILTER};
pub use facade::{MovieFacade, CATALOG_LIMIT, HOME_LIMIT};
pub use fixtures::FixtureSource;

pub use marquee_cache::*;
pub use marquee_core::*;
pub use marquee_error::*;
pub use marquee_interface::*;
pub use marquee_prefs::*;
pub use marquee_storage::{load_json, save_json, validate_key, FileSystemStore, LocalStore, MemoryStore};
