//! Leaderboard Trend Service - Binary Entry Point
//!
//! Binds the broker consumer, then serves the HTTP read surface until
//! Ctrl-C. Any broker setup failure terminates the process with a
//! non-zero status.

use std::sync::Arc;

use leaderboard_trends::config::Config;
use leaderboard_trends::consumer::TrendConsumer;
use leaderboard_trends::create_router;
use leaderboard_trends::store::TrendStore;
use leaderboard_trends::types::ServiceResult;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("fatal: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> ServiceResult<()> {
    let config = Config::from_env()?;
    let store = Arc::new(TrendStore::new(config.retention_limit));

    // Broker setup completes before anything is served
    let consumer = TrendConsumer::bind(&config, Arc::clone(&store)).await?;

    tokio::spawn(async move {
        match consumer.run().await {
            Ok(()) => log::error!("broker closed the delivery stream"),
            Err(err) => log::error!("consumer failed: {}", err),
        }
        std::process::exit(1);
    });

    let listener = tokio::net::TcpListener::bind(&config.http_address).await?;
    log::info!("serving trends at http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("cannot listen for shutdown signal: {}", err);
        return;
    }
    log::info!("shutting down");
}
