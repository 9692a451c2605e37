//! Text rendering of enriched movies.

use super::commands::OutputFormat;
use marquee::{
    EnrichedMovie, JsonError, MarqueeResult, format_rating, format_release_date, image_url,
    release_year, trailer_url, truncate_text,
};
use serde::Serialize;

const TITLE_WIDTH: usize = 48;
const OVERVIEW_WIDTH: usize = 240;

/// One line per movie: rating, year, title, favorite marker.
pub fn movie_row(movie: &EnrichedMovie) -> String {
    let year = release_year(&movie.release_date)
        .map(|year| year.to_string())
        .unwrap_or_else(|| "----".to_string());
    let marker = if movie.is_favorite { "★" } else { " " };
    format!(
        "{} {:>4}  {}  {:<8}  {}",
        marker,
        format_rating(movie.vote_average),
        year,
        movie.id,
        truncate_text(&movie.title, TITLE_WIDTH)
    )
}

/// Multi-line detail view.
pub fn movie_details(movie: &EnrichedMovie, size: &str) -> String {
    let mut lines = vec![format!(
        "{}{}",
        movie.title,
        if movie.is_favorite { "  ★" } else { "" }
    )];
    if !movie.original_title.is_empty() && movie.original_title != movie.title {
        lines.push(format!("Original title: {}", movie.original_title));
    }
    lines.push(format!(
        "Released:       {}",
        format_release_date(&movie.release_date)
    ));
    lines.push(format!(
        "Rating:         {} ({} votes)",
        format_rating(movie.vote_average),
        movie.vote_count
    ));
    if !movie.genres.is_empty() {
        lines.push(format!("Genres:         {}", movie.genres.join(", ")));
    }
    lines.push(format!(
        "Poster:         {}",
        image_url(movie.poster_path.as_deref(), size)
    ));
    if movie.backdrop_path.is_some() {
        lines.push(format!(
            "Backdrop:       {}",
            image_url(movie.backdrop_path.as_deref(), "original")
        ));
    }
    if let Some(trailer) = movie.trailer.as_deref().and_then(trailer_url) {
        lines.push(format!("Trailer:        {}", trailer));
    }
    if !movie.overview.is_empty() {
        lines.push(String::new());
        lines.push(truncate_text(&movie.overview, OVERVIEW_WIDTH));
    }
    lines.join("\n")
}

/// Print a listing in the requested format.
pub fn print_movies(movies: &[EnrichedMovie], format: OutputFormat) -> MarqueeResult<()> {
    match format {
        OutputFormat::Json => print_json(movies),
        OutputFormat::Human => {
            for movie in movies {
                println!("{}", movie_row(movie));
            }
            println!("Total: {} movies", movies.len());
            Ok(())
        }
    }
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> MarqueeResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(JsonError::from)?;
    println!("{}", json);
    Ok(())
}
