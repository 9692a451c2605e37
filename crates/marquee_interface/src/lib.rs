//! Trait definitions for the marquee movie catalog.
//!
//! This crate defines the seam between the catalog and whatever supplies
//! movies (a REST client, a GraphQL client, static fixtures).

mod traits;

pub use traits::MovieSource;
