//! Test utilities for catalog tests.
//!
//! This module provides a scripted movie source and record helpers.

pub mod mock_source;

#[allow(unused_imports)]
pub use mock_source::MockMovieSource;

use marquee_core::{Movie, MovieBuilder};

/// Helper to create a test movie using the builder pattern.
pub fn create_test_movie(id: u64, title: &str, release_date: &str, vote_average: f64) -> Movie {
    MovieBuilder::default()
        .id(id)
        .title(title)
        .original_title(title)
        .release_date(release_date)
        .vote_average(vote_average)
        .build()
        .expect("Failed to build test movie")
}

/// A small ranked catalog spanning several decades.
#[allow(dead_code)]
pub fn sample_movies() -> Vec<Movie> {
    vec![
        create_test_movie(278, "The Shawshank Redemption", "1994-09-23", 8.7),
        create_test_movie(238, "The Godfather", "1972-03-14", 8.7),
        create_test_movie(240, "The Godfather Part II", "1974-12-20", 8.6),
        create_test_movie(424, "Schindler's List", "1993-12-15", 8.6),
        create_test_movie(389, "12 Angry Men", "1957-04-10", 8.5),
        create_test_movie(155, "The Dark Knight", "2008-07-16", 8.5),
    ]
}
