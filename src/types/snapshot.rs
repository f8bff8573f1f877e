//! Decoded snapshot message

use super::LeaderboardEntry;

/// One decoded leaderboard snapshot message, ready to be merged into the
/// trend store.
#[derive(Debug, Clone)]
pub struct LeaderboardSnapshot {
    /// Leaderboard identity; normalized to its string form (publishers
    /// emit both string and numeric ids)
    pub id: String,
    /// Display name carried by the message
    pub name: String,
    /// The trend point this message contributes
    pub entry: LeaderboardEntry,
}
