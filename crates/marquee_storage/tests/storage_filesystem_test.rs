//! Tests for filesystem storage backend.

use marquee_error::MarqueeErrorKind;
use marquee_storage::{load_json, save_json, FileSystemStore, LocalStore};
use std::path::Path;
use tempfile::TempDir;

fn stored_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_set_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("theme", "\"dark\"").await.unwrap();

    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("\"dark\""));
    assert!(temp_dir.path().join("theme.json").exists());
}

#[tokio::test]
async fn test_missing_key_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert!(store.get("favorites").await.unwrap().is_none());
}

#[tokio::test]
async fn test_overwrite_replaces_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("favorites", "[\"1\"]").await.unwrap();
    store.set("favorites", "[\"1\",\"2\"]").await.unwrap();

    assert_eq!(
        store.get("favorites").await.unwrap().as_deref(),
        Some("[\"1\",\"2\"]")
    );
    assert_eq!(stored_files(temp_dir.path()), vec!["favorites.json".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_writes_to_one_key_leave_a_whole_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    let values: Vec<String> = (0..64)
        .map(|n| serde_json::to_string(&vec![n.to_string(); n + 1]).unwrap())
        .collect();
    let mut handles = Vec::new();
    for value in values.clone() {
        let store = store.clone();
        handles.push(tokio::spawn(
            async move { store.set("favorites", &value).await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = store.get("favorites").await.unwrap().unwrap();
    assert!(values.contains(&stored), "torn value: {stored}");
    assert_eq!(stored_files(temp_dir.path()), vec!["favorites.json".to_string()]);
}

#[tokio::test]
async fn test_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = FileSystemStore::new(temp_dir.path()).unwrap();
        save_json(&store, "favorites", &vec!["278", "238"]).await.unwrap();
    }

    let reopened = FileSystemStore::new(temp_dir.path()).unwrap();
    let ids: Option<Vec<String>> = load_json(&reopened, "favorites").await.unwrap();
    assert_eq!(ids, Some(vec!["278".to_string(), "238".to_string()]));
}

#[tokio::test]
async fn test_remove() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.set("theme", "\"light\"").await.unwrap();
    store.remove("theme").await.unwrap();
    assert!(store.get("theme").await.unwrap().is_none());

    // Removing again is fine
    store.remove("theme").await.unwrap();
}

#[tokio::test]
async fn test_invalid_keys_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    for key in ["", "../escape", "a/b", ".hidden"] {
        let err = store.set(key, "1").await.unwrap_err();
        assert!(matches!(err.kind(), MarqueeErrorKind::Storage(_)), "key {key:?}");
    }
}

#[tokio::test]
async fn test_corrupted_content_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();
    std::fs::write(temp_dir.path().join("favorites.json"), "{not json").unwrap();

    let result: Result<Option<Vec<String>>, _> = load_json(&store, "favorites").await;
    let err = result.unwrap_err();
    assert!(matches!(err.kind(), MarqueeErrorKind::Json(_)));
}

#[tokio::test]
async fn test_creates_nested_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    let store = FileSystemStore::new(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
    assert_eq!(store.backend_name(), "filesystem");
}
