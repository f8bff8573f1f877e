//! REST API module for HTTP endpoints
//!
//! Provides the read endpoints for web clients:
//! - `GET /api/leaderboards` - Full store snapshot
//! - `GET /api/leaderboards/:id` - One leaderboard record
//! - `GET /api/leaderboards/:id/trend/:index` - One trend entry

pub mod leaderboards;

use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Store revision at read time, for cache invalidation
    pub revision: u64,
    /// Total count (for collection responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, revision: u64) -> Self {
        Self {
            data,
            revision,
            total: None,
        }
    }

    pub fn with_total(data: T, revision: u64, total: usize) -> Self {
        Self {
            data,
            revision,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }
}
