use std::fs;

use serde_json::Value;
use tempfile::tempdir;
use tui_2048::scores::{JsonFileStore, MemoryStore, RecordOutcome, ScoreEntry, ScoreStore};

fn entry(name: &str, score: u64) -> ScoreEntry {
    ScoreEntry {
        name: name.to_string(),
        score,
    }
}

#[test]
fn json_store_writes_a_versioned_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.record("ada", 512).unwrap();
    store.record("bo", 2048).unwrap();

    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["version"], 1);
    let scores = doc["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0]["name"], "bo");
    assert_eq!(scores[0]["score"], 2048);
    assert_eq!(scores[1]["name"], "ada");
    assert_eq!(scores[1]["score"], 512);
}

#[test]
fn json_store_keeps_the_higher_score_across_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.record("ada", 1000).unwrap();
    }
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            store.record("ada", 400).unwrap(),
            RecordOutcome::Kept { best: 1000 }
        );
        assert_eq!(
            store.record("ada", 1200).unwrap(),
            RecordOutcome::Improved { previous: 1000 }
        );
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.best("ada").unwrap(), Some(entry("ada", 1200)));
}

#[test]
fn json_store_reads_hand_written_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(
        &path,
        r#"{"version":1,"scores":[{"name":"kim","score":8},{"name":"kim","score":64},{"name":"lee","score":64}]}"#,
    )
    .unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        store.leaderboard().unwrap(),
        vec![entry("kim", 64), entry("lee", 64)]
    );
}

#[test]
fn json_store_accepts_a_document_without_scores() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, r#"{"version":1}"#).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.leaderboard().unwrap().is_empty());
}

#[test]
fn stores_behave_the_same_behind_the_trait() {
    let dir = tempdir().unwrap();
    let mut stores: Vec<Box<dyn ScoreStore>> = vec![
        Box::new(MemoryStore::new()),
        Box::new(JsonFileStore::open(dir.path().join("scores.json")).unwrap()),
    ];

    for store in stores.iter_mut() {
        store.record("carol", 16).unwrap();
        store.record("alice", 32).unwrap();
        store.record("bob", 16).unwrap();
        assert!(store.record(" ", 4).is_err());

        assert_eq!(
            store.leaderboard().unwrap(),
            vec![entry("alice", 32), entry("bob", 16), entry("carol", 16)]
        );
        assert_eq!(store.best("nobody").unwrap(), None);
    }
}
