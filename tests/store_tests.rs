//! Integration tests for the trend store invariants

use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use leaderboard_trends::decode::decode;
use leaderboard_trends::store::TrendStore;
use leaderboard_trends::types::{LeaderboardEntry, LeaderboardSnapshot};

fn time_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 5, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn snapshot_at(id: &str, hour: u32) -> LeaderboardSnapshot {
    LeaderboardSnapshot {
        id: id.to_string(),
        name: format!("board {}", id),
        entry: LeaderboardEntry::new(time_at(hour)),
    }
}

fn hours(store: &TrendStore, id: &str) -> Vec<u32> {
    use chrono::Timelike;
    store
        .read_one(id)
        .unwrap()
        .trend
        .iter()
        .map(|entry| entry.time.time().hour())
        .collect()
}

#[test]
fn test_first_upsert_creates_record() {
    let store = TrendStore::new(10);

    assert!(store.read_one("weekly").is_none());

    store.upsert(snapshot_at("weekly", 1));

    let record = store.read_one("weekly").unwrap();
    assert_eq!(record.id, "weekly");
    assert_eq!(record.trend.len(), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_known_id_never_creates_second_record() {
    let store = TrendStore::new(10);

    store.upsert(snapshot_at("weekly", 1));
    store.upsert(snapshot_at("weekly", 2));
    store.upsert(snapshot_at("weekly", 3));

    assert_eq!(store.len(), 1);
    assert_eq!(store.read_one("weekly").unwrap().trend.len(), 3);
}

#[test]
fn test_out_of_order_delivery_is_resorted() {
    let store = TrendStore::new(10);

    store.upsert(snapshot_at("weekly", 3));
    store.upsert(snapshot_at("weekly", 1));
    store.upsert(snapshot_at("weekly", 2));

    assert_eq!(hours(&store, "weekly"), vec![1, 2, 3]);
}

#[test]
fn test_retention_keeps_most_recent() {
    let store = TrendStore::new(2);

    store.upsert(snapshot_at("weekly", 1));
    store.upsert(snapshot_at("weekly", 2));
    store.upsert(snapshot_at("weekly", 3));

    assert_eq!(hours(&store, "weekly"), vec![2, 3]);
}

#[test]
fn test_eviction_removes_oldest_even_when_late() {
    let store = TrendStore::new(1);

    store.upsert(snapshot_at("weekly", 5));
    // A late entry older than everything retained is evicted, not the
    // newer one already present
    store.upsert(snapshot_at("weekly", 1));

    assert_eq!(hours(&store, "weekly"), vec![5]);
}

#[test]
fn test_duplicate_timestamps_are_preserved_in_arrival_order() {
    let store = TrendStore::new(10);

    let mut first = snapshot_at("weekly", 1);
    first.entry.scores.insert("score".to_string(), json!(100));
    let mut second = snapshot_at("weekly", 1);
    second.entry.scores.insert("score".to_string(), json!(200));

    store.upsert(first);
    store.upsert(second);

    let record = store.read_one("weekly").unwrap();
    assert_eq!(record.trend.len(), 2);
    assert_eq!(record.trend[0].scores.get("score").unwrap(), 100);
    assert_eq!(record.trend[1].scores.get("score").unwrap(), 200);
}

#[test]
fn test_latest_name_wins() {
    let store = TrendStore::new(10);

    store.upsert(snapshot_at("1", 1));
    let mut renamed = snapshot_at("1", 2);
    renamed.name = "renamed".to_string();
    store.upsert(renamed);

    assert_eq!(store.read_one("1").unwrap().name, "renamed");
}

#[test]
fn test_read_all_is_a_detached_copy() {
    let store = TrendStore::new(10);
    store.upsert(snapshot_at("weekly", 1));

    let copy = store.read_all();
    store.upsert(snapshot_at("weekly", 2));

    assert_eq!(copy.get("weekly").unwrap().trend.len(), 1);
    assert_eq!(store.read_one("weekly").unwrap().trend.len(), 2);
}

#[test]
fn test_revision_counts_applied_upserts() {
    let store = TrendStore::new(10);
    assert_eq!(store.revision(), 0);

    store.upsert(snapshot_at("a", 1));
    store.upsert(snapshot_at("b", 1));

    assert_eq!(store.revision(), 2);
}

#[test]
fn test_decode_failure_does_not_affect_later_upserts() {
    let store = TrendStore::new(10);

    let bodies: Vec<&[u8]> = vec![
        b"not json",
        br#"{"id": "weekly", "name": "weekly", "leaderboard": {"time": "2017-05-01T01:00:00", "score": 7}}"#,
    ];

    for body in bodies {
        if let Ok(snapshot) = decode(body) {
            store.upsert(snapshot);
        }
    }

    assert_eq!(store.len(), 1);
    let record = store.read_one("weekly").unwrap();
    assert_eq!(record.trend.len(), 1);
    assert_eq!(record.trend[0].scores.get("score").unwrap(), 7);
}

#[test]
fn test_concurrent_reads_never_observe_broken_invariants() {
    let store = Arc::new(TrendStore::new(5));
    let writers: Vec<_> = (0..2)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500u32 {
                    // Deliberately non-monotonic timestamps
                    let hour = (i * 7 + w * 3) % 24;
                    store.upsert(snapshot_at("stress", hour));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    for record in store.read_all().values() {
                        assert!(record.trend.len() <= 5);
                        assert!(record
                            .trend
                            .windows(2)
                            .all(|pair| pair[0].time <= pair[1].time));
                    }
                    if let Some(record) = store.read_one("stress") {
                        assert!(record.trend.len() <= 5);
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    let record = store.read_one("stress").unwrap();
    assert_eq!(record.trend.len(), 5);
    assert!(record
        .trend
        .windows(2)
        .all(|pair| pair[0].time <= pair[1].time));
}
