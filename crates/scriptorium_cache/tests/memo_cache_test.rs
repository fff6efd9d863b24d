//! Tests for the filesystem memo cache.

use scriptorium_cache::{CacheKey, MemoCache, MemoCacheConfig};
use scriptorium_error::{HttpError, ScriptoriumError, ScriptoriumErrorKind};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Insight {
    reference: String,
    insight: String,
}

fn cache_in(dir: &TempDir) -> MemoCache {
    MemoCache::new(MemoCacheConfig::default().with_directory(dir.path().join("cache"))).unwrap()
}

#[tokio::test]
async fn test_json_entry_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_in(&temp_dir);
    let key = CacheKey::new("ScriptureInsight", &("Alma 32", 3)).unwrap();

    assert_eq!(cache.get_json::<Insight>(&key).await.unwrap(), None);

    let insight = Insight {
        reference: "Alma 32:21".to_string(),
        insight: "Faith is not a perfect knowledge".to_string(),
    };
    cache.put_json(&key, &insight).await.unwrap();

    let cached: Option<Insight> = cache.get_json(&key).await.unwrap();
    assert_eq!(cached, Some(insight));

    let file = temp_dir
        .path()
        .join("cache")
        .join(format!("ScriptureInsight-{}.json", key.hash()));
    assert!(file.exists());
}

#[tokio::test]
async fn test_producer_runs_once() {
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_in(&temp_dir);
    let key = CacheKey::new("fetch_website_text", &"https://example.org/lesson").unwrap();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let text = cache
            .get_or_try_insert_text_with(&key, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("lesson body".to_string())
            })
            .await
            .unwrap();
        assert_eq!(text, "lesson body");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_producer_caches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_in(&temp_dir);
    let key = CacheKey::new("fetch_website_text", &"https://example.org/down").unwrap();

    let err = cache
        .get_or_try_insert_text_with(&key, || async {
            Err(ScriptoriumError::from(HttpError::new("503")))
        })
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ScriptoriumErrorKind::Http(_)));
    assert_eq!(cache.get_text(&key).await.unwrap(), None);
}

#[tokio::test]
async fn test_disabled_cache_never_hits() {
    let cache = MemoCache::disabled();
    let key = CacheKey::new("lesson", &1).unwrap();

    cache.put_text(&key, "ignored").await.unwrap();
    assert_eq!(cache.get_text(&key).await.unwrap(), None);

    let value: u32 = cache
        .get_or_try_insert_json_with(&key, || async { Ok(7) })
        .await
        .unwrap();
    assert_eq!(value, 7);
}

#[tokio::test]
async fn test_remove_and_clear() {
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_in(&temp_dir);
    let first = CacheKey::new("lesson", &1).unwrap();
    let second = CacheKey::new("lesson", &2).unwrap();

    cache.put_text(&first, "one").await.unwrap();
    cache.put_json(&second, &2).await.unwrap();

    assert!(cache.remove(&first).await.unwrap());
    assert!(!cache.remove(&first).await.unwrap());
    assert_eq!(cache.get_text(&first).await.unwrap(), None);

    assert_eq!(cache.clear().await.unwrap(), 1);
    assert_eq!(cache.get_json::<u32>(&second).await.unwrap(), None);
}

#[tokio::test]
async fn test_clear_leaves_foreign_files() {
    let temp_dir = TempDir::new().unwrap();
    let directory = temp_dir.path().join("cache");
    let cache = MemoCache::new(MemoCacheConfig::default().with_directory(directory.clone())).unwrap();
    tokio::fs::write(directory.join("notes.txt"), "keep me").await.unwrap();
    tokio::fs::write(directory.join("package.json"), "{}").await.unwrap();

    let key = CacheKey::new("lesson", &1).unwrap();
    cache.put_text(&key, "one").await.unwrap();

    assert_eq!(cache.clear().await.unwrap(), 1);
    assert_eq!(
        tokio::fs::read_to_string(directory.join("notes.txt")).await.unwrap(),
        "keep me"
    );
    assert!(directory.join("package.json").exists());
}

#[tokio::test]
async fn test_text_and_json_entries_for_one_key_write_independently() {
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_in(&temp_dir);
    let key = CacheKey::new("lesson", &7).unwrap();

    for round in 0..20 {
        let text = format!("text {round}");
        let (text_result, json_result) =
            tokio::join!(cache.put_text(&key, &text), cache.put_json(&key, &round));
        text_result.unwrap();
        json_result.unwrap();

        assert_eq!(cache.get_text(&key).await.unwrap(), Some(text));
        assert_eq!(cache.get_json::<u32>(&key).await.unwrap(), Some(round));
    }
}
