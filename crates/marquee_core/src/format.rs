//! Display formatting for movie fields.
//!
//! These helpers never fail: unknown sizes, missing paths and unparsable
//! dates all fall back to a documented default.

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Host serving poster and backdrop images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Image shown when a movie has no poster.
pub const PLACEHOLDER_IMAGE: &str = "assets/no-poster.png";

const TRAILER_BASE_URL: &str = "https://www.youtube.com/watch?v=";

/// Image widths offered by the image host.
///
/// # Examples
///
/// ```
/// use marquee_core::ImageSize;
///
/// assert_eq!(ImageSize::parse_or_default("w185"), ImageSize::W185);
/// assert_eq!(ImageSize::parse_or_default("huge"), ImageSize::W500);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ImageSize {
    /// 92px wide
    #[display("w92")]
    W92,
    /// 154px wide
    #[display("w154")]
    W154,
    /// 185px wide
    #[display("w185")]
    W185,
    /// 342px wide
    #[display("w342")]
    W342,
    /// 500px wide, the default
    #[default]
    #[display("w500")]
    W500,
    /// 780px wide
    #[display("w780")]
    W780,
    /// Full resolution
    #[display("original")]
    Original,
}

impl ImageSize {
    /// Parse a size name, falling back to [`ImageSize::W500`].
    pub fn parse_or_default(size: &str) -> Self {
        size.parse().unwrap_or_default()
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w92" => Ok(ImageSize::W92),
            "w154" => Ok(ImageSize::W154),
            "w185" => Ok(ImageSize::W185),
            "w342" => Ok(ImageSize::W342),
            "w500" => Ok(ImageSize::W500),
            "w780" => Ok(ImageSize::W780),
            "original" => Ok(ImageSize::Original),
            _ => Err(format!("Unknown image size: {}", s)),
        }
    }
}

/// Full image URL for a poster/backdrop path, or the placeholder when absent.
///
/// # Examples
///
/// ```
/// use marquee_core::image_url;
///
/// assert_eq!(
///     image_url(Some("/abc.jpg"), "w92"),
///     "https://image.tmdb.org/t/p/w92/abc.jpg"
/// );
/// assert_eq!(image_url(Some("/abc.jpg"), "bogus"), "https://image.tmdb.org/t/p/w500/abc.jpg");
/// assert_eq!(image_url(None, "w92"), "assets/no-poster.png");
/// ```
pub fn image_url(path: Option<&str>, size: &str) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            let size = ImageSize::parse_or_default(size);
            if path.starts_with('/') {
                format!("{IMAGE_BASE_URL}{size}{path}")
            } else {
                format!("{IMAGE_BASE_URL}{size}/{path}")
            }
        }
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Rating with one decimal, clamped to the 0-10 scale.
pub fn format_rating(rating: f64) -> String {
    let rating = if rating.is_nan() { 0.0 } else { rating };
    format!("{:.1}", rating.clamp(0.0, 10.0))
}

/// Human readable release date (`Sep 10, 1994`); unparsable input is returned as-is.
pub fn format_release_date(release_date: &str) -> String {
    match NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => release_date.to_string(),
    }
}

/// Year component of an ISO release date.
pub fn release_year(release_date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d")
        .map(|date| date.year())
        .ok()
        .or_else(|| release_date.trim().get(..4)?.parse().ok())
}

/// Shorten text to at most `max_chars` characters, the closing `…` included.
///
/// # Examples
///
/// ```
/// use marquee_core::truncate_text;
///
/// assert_eq!(truncate_text("a long overview", 6), "a lon…");
/// assert_eq!(truncate_text("short", 10), "short");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let Some(keep) = max_chars.checked_sub(1) else {
        return String::new();
    };
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push('…');
    truncated
}

/// Watch URL for a trailer reference; bare keys are treated as YouTube ids.
pub fn trailer_url(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        None
    } else if reference.starts_with("http://") || reference.starts_with("https://") {
        Some(reference.to_string())
    } else {
        Some(format!("{TRAILER_BASE_URL}{reference}"))
    }
}
