//! Grouping movies by release decade.

use crate::EnrichedMovie;
use std::collections::BTreeMap;

/// Group label for release dates too short to carry a decade.
pub const UNKNOWN_DECADE: &str = "unknown";

/// Decade label for a release date: its first three characters plus `"0s"`.
///
/// # Examples
///
/// ```
/// use marquee_core::decade_of;
///
/// assert_eq!(decade_of("1994-09-10"), "1990s");
/// assert_eq!(decade_of("2001-03-05"), "2000s");
/// assert_eq!(decade_of(""), "unknown");
/// ```
pub fn decade_of(release_date: &str) -> String {
    let prefix: String = release_date.trim().chars().take(3).collect();
    if prefix.chars().count() < 3 {
        return UNKNOWN_DECADE.to_string();
    }
    format!("{prefix}0s")
}

/// Group movies by decade, each group sorted ascending by release date.
///
/// Key order in the returned map carries no meaning for display; use
/// [`decades_descending`] for the newest-first convention.
pub fn group_by_decade(
    movies: impl IntoIterator<Item = EnrichedMovie>,
) -> BTreeMap<String, Vec<EnrichedMovie>> {
    let mut groups: BTreeMap<String, Vec<EnrichedMovie>> = BTreeMap::new();
    for movie in movies {
        groups
            .entry(decade_of(&movie.release_date))
            .or_default()
            .push(movie);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.release_date.cmp(&b.release_date));
    }
    groups
}

/// Decade labels newest first.
pub fn decades_descending(groups: &BTreeMap<String, Vec<EnrichedMovie>>) -> Vec<&str> {
    groups.keys().rev().map(String::as_str).collect()
}
