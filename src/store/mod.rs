//! Trend store - Core data engine
//!
//! This module contains the in-memory trend store: a mapping from
//! leaderboard id to a bounded, time-ordered history of snapshot entries,
//! safe for concurrent reads (HTTP handlers) and writes (message delivery).

mod query;
mod upsert;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::types::{LeaderboardRecord, LeaderboardSnapshot};

/// In-memory trend store with internal synchronization.
///
/// Owned as an `Arc<TrendStore>` shared between the consumer task and the
/// HTTP router state; there is no module-level singleton. Records are
/// created lazily on the first snapshot bearing an unseen id and never
/// deleted during the process lifetime.
pub struct TrendStore {
    pub(crate) records: RwLock<HashMap<String, LeaderboardRecord>>,
    pub(crate) retention_limit: usize,
    revision: AtomicU64,
}

impl TrendStore {
    /// Create an empty store keeping at most `retention_limit` entries
    /// per leaderboard
    pub fn new(retention_limit: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            retention_limit,
            revision: AtomicU64::new(0),
        }
    }

    /// Retention limit this store was created with
    pub fn retention_limit(&self) -> usize {
        self.retention_limit
    }

    /// Current upsert revision, incremented once per applied snapshot.
    /// Exposed to API consumers for cache invalidation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub(crate) fn bump_revision(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst)
    }
}

impl TrendStore {
    /// Merge a snapshot into the store, creating the record on first
    /// observation of its id (from upsert.rs)
    pub fn upsert(&self, snapshot: LeaderboardSnapshot) {
        upsert::upsert(self, snapshot)
    }

    /// Cloned snapshot of the full current state (from query.rs)
    pub fn read_all(&self) -> HashMap<String, LeaderboardRecord> {
        query::read_all(self)
    }

    /// Cloned view of one record; `None` when the id has never been
    /// observed (from query.rs)
    pub fn read_one(&self, id: &str) -> Option<LeaderboardRecord> {
        query::read_one(self, id)
    }

    /// Number of leaderboards currently tracked (from query.rs)
    pub fn len(&self) -> usize {
        query::len(self)
    }

    /// True when no snapshot has been observed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
