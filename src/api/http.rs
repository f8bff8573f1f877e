//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::store::TrendStore;

use super::rest::leaderboards;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<TrendStore>) -> Router {
    // CORS configuration - allow all origins, the surface is read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/leaderboards", get(leaderboards::list_leaderboards))
        .route("/api/leaderboards/:id", get(leaderboards::get_leaderboard))
        .route(
            "/api/leaderboards/:id/trend/:index",
            get(leaderboards::get_trend_entry),
        )
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let store = Arc::new(TrendStore::new(10));
        let app = create_router(store);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
