//! Core data types for the marquee movie catalog.
//!
//! This crate provides the movie model shared by every marquee crate, the
//! decade grouping and display helpers used by the presentation layer, and
//! the snapshot cell that backs all observable state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod decade;
mod format;
mod movie;
mod state;
mod telemetry;

pub use collection::{CollectionKind, QueryKey};
pub use decade::{decade_of, decades_descending, group_by_decade, UNKNOWN_DECADE};
pub use format::{
    format_rating, format_release_date, image_url, release_year, trailer_url, truncate_text,
    ImageSize, IMAGE_BASE_URL, PLACEHOLDER_IMAGE,
};
pub use movie::{EnrichedMovie, Movie, MovieBuilder, MovieBuilderError, MovieId};
pub use state::StateCell;
pub use telemetry::init_tracing;
