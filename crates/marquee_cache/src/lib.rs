//! Movie collection caching with TTL support.
//!
//! This crate sits between the presentation layer and a [`MovieSource`]:
//! collections are memoized per query shape for [`TTL`], refetched once
//! stale, and served from the last good copy when the source fails.
//!
//! [`MovieSource`]: marquee_interface::MovieSource

#![warn(missing_docs)]

mod cache;
mod catalog;

pub use cache::{CacheEntry, CatalogState, TTL};
pub use catalog::{
    MovieCatalog, FETCH_ERROR_MESSAGE, LOOKUP_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE,
};
