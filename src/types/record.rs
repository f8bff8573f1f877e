//! Leaderboard record and trend entry types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One historical snapshot point of a leaderboard.
///
/// `time` is the naive local timestamp carried by the snapshot message;
/// no timezone conversion is applied. The remaining score/rank fields of
/// the wire document are kept verbatim and flattened back on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub time: NaiveDateTime,
    #[serde(flatten)]
    pub scores: Map<String, Value>,
}

impl LeaderboardEntry {
    /// Create an entry with an empty score payload
    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            time,
            scores: Map::new(),
        }
    }
}

/// Accumulated state for one leaderboard identity.
///
/// Invariants maintained by the store: `trend` is sorted ascending by
/// timestamp, and `trend.len()` never exceeds the configured retention
/// limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub trend: Vec<LeaderboardEntry>,
}

impl LeaderboardRecord {
    /// Create a record with an empty trend
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            trend: Vec::new(),
        }
    }
}
