//! Read operations for the trend store
//!
//! All reads clone under the lock and hand back owned data, never a handle
//! into live mutable state.

use std::collections::HashMap;

use crate::types::LeaderboardRecord;

use super::TrendStore;

/// Snapshot of the full current state
pub(super) fn read_all(store: &TrendStore) -> HashMap<String, LeaderboardRecord> {
    store.records.read().clone()
}

/// One record by id; `None` distinguishes "never observed" from an empty
/// trend
pub(super) fn read_one(store: &TrendStore, id: &str) -> Option<LeaderboardRecord> {
    store.records.read().get(id).cloned()
}

/// Number of tracked leaderboards
pub(super) fn len(store: &TrendStore) -> usize {
    store.records.read().len()
}
