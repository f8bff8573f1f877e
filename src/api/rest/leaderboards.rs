//! Leaderboard endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::store::TrendStore;
use crate::types::LeaderboardRecord;

/// GET /api/leaderboards - Full snapshot of the current state
///
/// Returns every tracked leaderboard with its trend history. The body is
/// a copy taken under the store lock, never a view into live state.
pub async fn list_leaderboards(State(store): State<Arc<TrendStore>>) -> impl IntoResponse {
    let records = store.read_all();
    let total = records.len();

    Json(ApiResponse::with_total(records, store.revision(), total))
}

/// GET /api/leaderboards/:id - Get a single leaderboard record
///
/// 404 means the id has never been observed, which is distinct from a
/// record with an empty trend.
pub async fn get_leaderboard(
    State(store): State<Arc<TrendStore>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // URL decode the id (handles spaces and special chars)
    let decoded_id = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    match store.read_one(&decoded_id) {
        Some(record) => {
            (StatusCode::OK, Json(ApiResponse::new(record, store.revision()))).into_response()
        }
        None => not_found(&decoded_id),
    }
}

/// GET /api/leaderboards/:id/trend/:index - Get one trend entry
///
/// Thin derived view over `record.trend[index]`; index 0 is the oldest
/// retained entry.
pub async fn get_trend_entry(
    State(store): State<Arc<TrendStore>>,
    Path((id, index)): Path<(String, usize)>,
) -> impl IntoResponse {
    let decoded_id = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    let record: Option<LeaderboardRecord> = store.read_one(&decoded_id);
    match record {
        Some(record) => match record.trend.get(index) {
            Some(entry) => {
                (StatusCode::OK, Json(ApiResponse::new(entry.clone(), store.revision())))
                    .into_response()
            }
            None => {
                let error = ApiError::not_found(format!(
                    "Leaderboard '{}' has no trend entry at index {}",
                    decoded_id, index
                ));
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            }
        },
        None => not_found(&decoded_id),
    }
}

fn not_found(id: &str) -> axum::response::Response {
    let error = ApiError::not_found(format!("Leaderboard '{}' not found", id));
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}
