//! User preferences for marquee.
//!
//! Two small stores live here, both mirrored to a [`LocalStore`]:
//!
//! - [`FavoritesStore`]: the authoritative set of favorite movie ids
//! - [`ThemeStore`]: the light/dark theme choice
//!
//! Each store keeps its state in memory as the source of truth and writes
//! through to storage after every change. Storage failures are logged and
//! surfaced in the state's `error` field; they never reach the caller.
//!
//! [`LocalStore`]: marquee_storage::LocalStore

#![warn(missing_docs)]

mod favorites;
mod theme;

pub use favorites::{
    FavoritesState, FavoritesStore, FAVORITES_KEY, LOAD_ERROR_MESSAGE, SAVE_ERROR_MESSAGE,
};
pub use theme::{Theme, ThemeState, ThemeStore, THEME_KEY};
