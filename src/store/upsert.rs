//! Merge-or-create operation for the trend store

use crate::types::{LeaderboardRecord, LeaderboardSnapshot};

use super::TrendStore;

/// Merge a snapshot into the store.
///
/// Unseen ids create a fresh record; the new entry is appended, the trend
/// re-sorted ascending by timestamp, and the oldest entries evicted while
/// the trend exceeds the retention limit. The sort is stable and uses a
/// three-way timestamp comparison, so entries arriving out of order land
/// in their correct position while equal-timestamp duplicates keep their
/// arrival order (duplicates are not deduplicated).
pub(super) fn upsert(store: &TrendStore, snapshot: LeaderboardSnapshot) {
    let mut records = store.records.write();

    let record = records
        .entry(snapshot.id.clone())
        .or_insert_with(|| LeaderboardRecord::new(snapshot.id.clone(), snapshot.name.clone()));

    // Latest message wins for the display name
    record.name = snapshot.name;

    record.trend.push(snapshot.entry);
    record.trend.sort_by(|a, b| a.time.cmp(&b.time));

    while record.trend.len() > store.retention_limit {
        record.trend.remove(0);
    }

    drop(records);
    store.bump_revision();
}
