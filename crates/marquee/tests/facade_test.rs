//! Tests for the enrichment facade.

mod test_utils;

use futures::StreamExt;
use marquee::{HOME_LIMIT, MemoryStore, MovieId, decades_descending};
use test_utils::create_test_facade;

#[tokio::test]
async fn test_home_movies_ranked_and_untagged() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;

    let movies = facade.get_home_movies().await;

    assert!(!movies.is_empty());
    assert!(movies.len() <= HOME_LIMIT);
    assert_eq!(movies[0].id, MovieId::from(278));
    assert!(movies.windows(2).all(|w| w[0].vote_average >= w[1].vote_average));
    assert!(movies.iter().all(|m| !m.is_favorite));
}

#[tokio::test]
async fn test_home_movies_served_from_cache() {
    let (source, facade) = create_test_facade(MemoryStore::new()).await;

    facade.get_home_movies().await;
    facade.get_home_movies().await;

    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_enrichment_is_point_in_time() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    let godfather = MovieId::from(238);

    let before = facade.get_home_movies().await;
    facade.toggle_movie_favorite(godfather).await;
    let after = facade.get_home_movies().await;

    let tagged = |movies: &[marquee::EnrichedMovie]| {
        movies
            .iter()
            .find(|m| m.id == godfather)
            .map(|m| m.is_favorite)
    };
    assert_eq!(tagged(&before), Some(false));
    assert_eq!(tagged(&after), Some(true));
}

#[tokio::test]
async fn test_no_favorites_skips_catalog() {
    let (source, facade) = create_test_facade(MemoryStore::new()).await;

    assert!(facade.get_favorite_movies().await.is_empty());
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_favorite_movies_all_tagged() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    facade.toggle_movie_favorite(MovieId::from(155)).await;
    facade.toggle_movie_favorite(MovieId::from(129)).await;

    let favorites = facade.get_favorite_movies().await;

    let mut ids: Vec<u64> = favorites.iter().map(|m| m.id.value()).collect();
    ids.sort();
    assert_eq!(ids, vec![129, 155]);
    assert!(favorites.iter().all(|m| m.is_favorite));
}

#[tokio::test]
async fn test_favorites_survive_new_facade() {
    let store = MemoryStore::new();
    let (_source, facade) = create_test_facade(store.clone()).await;
    facade.toggle_movie_favorite(MovieId::from(680)).await;

    let (_source, reopened) = create_test_facade(store).await;

    assert!(reopened.is_movie_favorite(MovieId::from(680)));
    let favorites = reopened.get_favorite_movies().await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].title, "Pulp Fiction");
}

#[tokio::test]
async fn test_decades_sorted_within_group() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;

    let groups = facade.get_movies_by_decades().await;

    let nineties: Vec<&str> = groups["1990s"]
        .iter()
        .map(|m| m.release_date.as_str())
        .collect();
    assert_eq!(
        nineties,
        vec!["1993-12-15", "1994-06-23", "1994-09-10", "1994-09-23", "1995-10-20"]
    );
    assert_eq!(
        decades_descending(&groups),
        vec!["2010s", "2000s", "1990s", "1970s", "1960s", "1950s"]
    );
}

#[tokio::test]
async fn test_decades_carry_favorite_status() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    facade.toggle_movie_favorite(MovieId::from(389)).await;

    let groups = facade.get_movies_by_decades().await;

    let fifties = &groups["1950s"];
    assert_eq!(fifties.len(), 1);
    assert!(fifties[0].is_favorite);
}

#[tokio::test]
async fn test_movie_by_id_with_status() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    facade.toggle_movie_favorite(MovieId::from(13)).await;

    let movie = facade.get_movie_by_id(MovieId::from(13)).await.unwrap();

    assert_eq!(movie.title, "Forrest Gump");
    assert!(movie.is_favorite);
}

#[tokio::test]
async fn test_missing_movie_is_none_even_if_favorite() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    let ghost = MovieId::from(999_999);
    facade.toggle_movie_favorite(ghost).await;

    assert!(facade.is_movie_favorite(ghost));
    assert!(facade.get_movie_by_id(ghost).await.is_none());
}

#[tokio::test]
async fn test_search_enriched() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    facade.toggle_movie_favorite(MovieId::from(240)).await;

    let results = facade.search_movies("godfather", 10).await;

    assert_eq!(results.len(), 2);
    let part_two = results.iter().find(|m| m.id == MovieId::from(240)).unwrap();
    assert!(part_two.is_favorite);
    assert!(results.iter().filter(|m| m.is_favorite).count() == 1);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let (source, facade) = create_test_facade(MemoryStore::new()).await;

    facade.get_home_movies().await;
    facade.clear_cache();
    facade.get_home_movies().await;

    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_state_subscriptions() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    let mut catalog_rx = facade.catalog_state();
    let mut favorites_rx = facade.favorites_state();

    facade.get_home_movies().await;
    facade.toggle_movie_favorite(MovieId::from(278)).await;

    assert!(catalog_rx.has_changed().unwrap());
    assert_eq!(catalog_rx.borrow_and_update().entries().len(), 1);
    assert!(favorites_rx.has_changed().unwrap());
    assert!(favorites_rx.borrow_and_update().contains(MovieId::from(278)));
}

#[tokio::test]
async fn test_watch_movie_favorite() {
    let (_source, facade) = create_test_facade(MemoryStore::new()).await;
    let id = MovieId::from(122);
    let mut status = Box::pin(facade.watch_movie_favorite(id));

    assert_eq!(status.next().await, Some(false));
    facade.toggle_movie_favorite(id).await;
    assert_eq!(status.next().await, Some(true));
}
