//! Data types for the leaderboard trend service
//!
//! This module contains the core data structures shared by the consumer,
//! the store, and the HTTP API.

mod record;
mod snapshot;

pub use record::{LeaderboardEntry, LeaderboardRecord};
pub use snapshot::LeaderboardSnapshot;

/// Result type for fallible service operations
pub type ServiceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
