//! Leaderboard Trend Service
//!
//! Consumes periodic leaderboard snapshots from a fanout message exchange,
//! accumulates them per leaderboard id as a bounded time-ordered trend
//! history, and serves the latest state to web clients over HTTP.
//!
//! # Modules
//!
//! - `types`: Core data structures (LeaderboardEntry, LeaderboardRecord)
//! - `config`: Environment configuration with hard-coded defaults
//! - `decode`: Snapshot message decoding and naive timestamp parsing
//! - `store`: Thread-safe trend store with merge-or-create upsert
//! - `consumer`: Queue binding and ack-after-apply delivery loop
//! - `api`: Axum REST read surface over the store
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use leaderboard_trends::{create_router, Config, TrendConsumer, TrendStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let store = Arc::new(TrendStore::new(config.retention_limit));
//!
//!     let consumer = TrendConsumer::bind(&config, Arc::clone(&store)).await.unwrap();
//!     tokio::spawn(consumer.run());
//!
//!     let listener = tokio::net::TcpListener::bind(&config.http_address).await.unwrap();
//!     axum::serve(listener, create_router(store)).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod consumer;
pub mod decode;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::http::create_router;
pub use config::{Config, ConfigError};
pub use consumer::TrendConsumer;
pub use decode::{decode, parse_local_timestamp, DecodeError};
pub use store::TrendStore;
pub use types::{LeaderboardEntry, LeaderboardRecord, LeaderboardSnapshot, ServiceResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
