//! Tests for the fixture movie source.

use marquee::{FixtureSource, MarqueeErrorKind, MovieId, MovieSource};
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_bundled_catalog_parses() {
    let source = FixtureSource::bundled().unwrap();
    assert_eq!(source.movies().len(), 14);
    assert_eq!(source.source_name(), "fixtures");
}

#[tokio::test]
async fn test_top_rated_descending() {
    let source = FixtureSource::bundled().unwrap();

    let top = source.fetch_top_rated(5).await.unwrap();

    assert_eq!(top.len(), 5);
    assert!(top.windows(2).all(|w| w[0].vote_average >= w[1].vote_average));
}

#[tokio::test]
async fn test_chronological_is_same_slice_by_date() {
    let source = FixtureSource::bundled().unwrap();

    let top = source.fetch_top_rated(6).await.unwrap();
    let chronological = source.fetch_top_rated_chronological(6).await.unwrap();

    let mut expected = top.clone();
    expected.sort_by(|a, b| a.release_date.cmp(&b.release_date));
    assert_eq!(chronological, expected);
}

#[tokio::test]
async fn test_fetch_by_id() {
    let source = FixtureSource::bundled().unwrap();

    let movie = source.fetch_by_id(MovieId::from(496243)).await.unwrap();
    assert_eq!(movie.map(|m| m.original_title), Some("기생충".to_string()));
    assert!(source.fetch_by_id(MovieId::from(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_search_matches_original_title() {
    let source = FixtureSource::bundled().unwrap();

    let found = source.search("cattivo", 10).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, MovieId::from(429));
}

#[tokio::test]
async fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "title": "Solo", "release_date": "2000-01-01", "vote_average": 7.0}}]"#
    )
    .unwrap();

    let source = FixtureSource::from_file(file.path()).unwrap();

    assert_eq!(source.movies().len(), 1);
    assert_eq!(source.movies()[0].title, "Solo");
    assert!(source.movies()[0].poster_path.is_none());
}

#[test]
fn test_malformed_json_is_error() {
    let err = FixtureSource::from_json("{\"id\": 1}").unwrap_err();
    assert!(matches!(err.kind(), MarqueeErrorKind::Json(_)));
}

#[test]
fn test_missing_file_is_source_error() {
    let err = FixtureSource::from_file("/nonexistent/movies.json").unwrap_err();
    assert!(matches!(err.kind(), MarqueeErrorKind::Source(_)));
}
