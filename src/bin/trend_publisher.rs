//! Synthetic snapshot publisher
//!
//! Publishes synthetic leaderboard snapshots through the same fanout
//! exchange the trend server consumes from, for exercising the service
//! against a live broker.
//!
//! Usage: `trend-publisher [rounds] [interval-ms] [boards]`

use std::env;
use std::time::Duration;

use chrono::Local;
use lapin::options::{BasicPublishOptions, ExchangeDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Connection, ConnectionProperties, ExchangeKind};
use rand::Rng;
use serde_json::json;

use leaderboard_trends::config::Config;
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
    let args: Vec<String> = env::args().collect();
    let rounds: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(30);
    let interval_ms: u64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(1000);
    let boards: u32 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(3);

    let config = Config::from_env()?;
    let connection =
        Connection::connect(&config.amqp_address, ConnectionProperties::default()).await?;
    let channel = connection.create_channel().await?;

    channel
        .exchange_declare(
            &config.amqp_exchange,
            ExchangeKind::Fanout,
            ExchangeDeclareOptions::default(),
            FieldTable::default(),
        )
        .await?;

    log::info!(
        "publishing {} rounds for {} boards to exchange '{}' every {}ms",
        rounds,
        boards,
        config.amqp_exchange,
        interval_ms
    );

    for round in 0..rounds {
        for board in 0..boards {
            let body = synthetic_snapshot(board);
            let _confirm = channel
                .basic_publish(
                    &config.amqp_exchange,
                    &config.amqp_routing_key,
                    BasicPublishOptions::default(),
                    body.as_bytes(),
                    BasicProperties::default(),
                )
                .await?;
        }
        log::info!("published round {}/{}", round + 1, rounds);
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }

    Ok(())
}

/// Build one snapshot body in the wire shape the consumer expects
fn synthetic_snapshot(board: u32) -> String {
    let mut rng = rand::thread_rng();
    json!({
        "id": board,
        "name": format!("leaderboard-{}", board),
        "leaderboard": {
            "time": Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "score": rng.gen_range(0..10_000),
            "rank": rng.gen_range(1..100),
        },
    })
    .to_string()
}
