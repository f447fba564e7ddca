use std::fs;

use chrono::{TimeZone, Utc};
use feed_core::feed::{FeedConfig, FeedEngine, SortMode};
use feed_core::post::{PostId, PostStore, TopicId, ValidationStatus};
use feed_core::types::{FeedError, Viewer};
use feed_core::votes::Vote;
use tempfile::tempdir;

const SEED: &str = r#"[
  {
    "id": "p1",
    "author": { "id": "ada", "display_name": "Ada" },
    "title": "Two pointers",
    "code": "let (mut i, mut j) = (0, n - 1);",
    "ai_relevance": 88,
    "weighted_score": 12,
    "validation_status": "verified",
    "topic_id": "arrays",
    "created_at": "2024-05-01T12:00:00Z"
  },
  {
    "id": "p2",
    "author": { "id": "bob", "display_name": "Bob" },
    "ai_relevance": 64,
    "weighted_score": -3,
    "shadow_banned": true,
    "topic_id": "graphs"
  },
  {
    "id": "p3",
    "author": { "id": "cyd", "display_name": "Cyd" },
    "ai_relevance": 91,
    "topic_id": "arrays"
  }
]"#;

#[test]
fn seed_file_ingests_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("posts.json");
    fs::write(&path, SEED).unwrap();

    let store = PostStore::from_path(&path).unwrap();
    assert_eq!(store.len(), 3);

    let p1 = store.get(&PostId::new("p1").unwrap()).unwrap();
    assert_eq!(p1.validation_status, ValidationStatus::Verified);
    assert_eq!(p1.created_at, Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));

    let p3 = store.get(&PostId::new("p3").unwrap()).unwrap();
    assert_eq!(p3.weighted_score, 0);
    assert_eq!(p3.validation_status, ValidationStatus::None);
    assert!(!p3.shadow_banned);
    assert!(p3.code.is_empty());
}

#[test]
fn topic_scope_feeds_the_engine() {
    let store = PostStore::from_reader(SEED.as_bytes())
        .unwrap()
        .scoped_to_topic(&TopicId::new("arrays").unwrap());

    let engine = FeedEngine::new(store, FeedConfig::v0());
    let ids: Vec<&str> = engine
        .visible_posts(&Viewer::anonymous())
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["p3", "p1"]);
    assert_eq!(engine.sort_mode(), SortMode::Relevance);
}

#[test]
fn duplicate_ids_fail_ingestion() {
    let json = r#"[
      { "id": "p1", "author": { "id": "a", "display_name": "A" }, "ai_relevance": 50 },
      { "id": "p1", "author": { "id": "b", "display_name": "B" }, "ai_relevance": 60 }
    ]"#;

    let err = PostStore::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, FeedError::DuplicatePostId(ref id) if id == "p1"));
    assert_eq!(err.to_string(), "Duplicate post ID: p1");
}

#[test]
fn seeded_ids_are_trimmed_to_addressable_form() {
    let json = r#"[{ "id": " p1 ", "author": { "id": " ada ", "display_name": "Ada" }, "ai_relevance": 50 }]"#;

    let store = PostStore::from_reader(json.as_bytes()).unwrap();
    let post = store.get(&PostId::new("p1").unwrap()).expect("trimmed id resolves");
    assert_eq!(post.author.id.as_str(), "ada");

    let mut engine = FeedEngine::new(store, FeedConfig::v0());
    let voter = feed_core::post::UserId::new("v").unwrap();
    assert_eq!(engine.vote(&PostId::new("p1").unwrap(), &voter, Vote::Up), Some(1));
}

#[test]
fn blank_or_spaced_ids_fail_ingestion() {
    let seeds = [
        r#"[{ "id": "", "author": { "id": "a", "display_name": "A" }, "ai_relevance": 50 }]"#,
        r#"[{ "id": "p1", "author": { "id": "", "display_name": "A" }, "ai_relevance": 50 }]"#,
        r#"[{ "id": "p 1", "author": { "id": "a", "display_name": "A" }, "ai_relevance": 50 }]"#,
        r#"[{ "id": "p1", "author": { "id": "a", "display_name": "A" }, "ai_relevance": 50, "topic_id": "  " }]"#,
    ];

    for seed in seeds {
        let err = PostStore::from_reader(seed.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedError::Json(_)), "{seed}");
    }
}

#[test]
fn relevance_above_hundred_fails_ingestion() {
    let json = r#"[{ "id": "p1", "author": { "id": "a", "display_name": "A" }, "ai_relevance": 101 }]"#;

    let err = PostStore::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, FeedError::RelevanceOutOfRange { relevance: 101, .. }));
}

#[test]
fn malformed_json_and_missing_file_are_reported() {
    let err = PostStore::from_reader("not json".as_bytes()).unwrap_err();
    assert!(matches!(err, FeedError::Json(_)));

    let dir = tempdir().unwrap();
    let err = PostStore::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FeedError::Io(_)));
}
