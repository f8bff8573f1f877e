//! Broker consumer wiring
//!
//! Establishes the queue binding against the fanout exchange and drains
//! deliveries into the trend store. Setup is a sequential ownership chain
//! (connection owns channel, channel owns the declare/bind steps); the
//! first error aborts the chain and is fatal for the process.

mod token;

pub use token::queue_token;

use std::sync::Arc;

use futures::StreamExt;
use lapin::options::{
    BasicAckOptions, BasicConsumeOptions, BasicQosOptions, ExchangeDeclareOptions,
    QueueBindOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties, Consumer, ExchangeKind};

use crate::config::Config;
use crate::decode::decode;
use crate::store::TrendStore;

/// One live consumer: the process-wide binding between the broker and the
/// trend store.
pub struct TrendConsumer {
    // Held for their lifetimes: dropping the connection closes the channel
    // and lets the broker discard the auto-delete queue
    _connection: Connection,
    _channel: Channel,
    deliveries: Consumer,
    store: Arc<TrendStore>,
}

impl TrendConsumer {
    /// Establish the full broker binding: one connection, one channel, a
    /// non-durable fanout exchange, a fresh exclusive auto-delete queue
    /// named by a generated token, the binding, and the consume handle.
    ///
    /// Any failure at any step propagates out immediately; there is no
    /// partial-setup retry and no reconnection logic. The caller is
    /// expected to treat an error as fatal.
    pub async fn bind(config: &Config, store: Arc<TrendStore>) -> lapin::Result<Self> {
        let connection =
            Connection::connect(&config.amqp_address, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        // One unacknowledged delivery in flight at a time
        channel.basic_qos(1, BasicQosOptions::default()).await?;

        // durable defaults to false, matching the publisher side
        channel
            .exchange_declare(
                &config.amqp_exchange,
                ExchangeKind::Fanout,
                ExchangeDeclareOptions::default(),
                FieldTable::default(),
            )
            .await?;

        let queue_name = queue_token();
        channel
            .queue_declare(
                &queue_name,
                QueueDeclareOptions {
                    exclusive: true,
                    auto_delete: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        channel
            .queue_bind(
                &queue_name,
                &config.amqp_exchange,
                &config.amqp_routing_key,
                QueueBindOptions::default(),
                FieldTable::default(),
            )
            .await?;

        let deliveries = channel
            .basic_consume(
                &queue_name,
                "trend-consumer",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await?;

        log::info!(
            "bound queue '{}' to exchange '{}' with routing key '{}'",
            queue_name,
            config.amqp_exchange,
            config.amqp_routing_key
        );

        Ok(Self {
            _connection: connection,
            _channel: channel,
            deliveries,
            store,
        })
    }

    /// Drain deliveries until the broker closes the stream.
    ///
    /// A message is acknowledged only after the store upsert has been
    /// applied. Undecodable messages are logged and acknowledged-and-
    /// dropped; no delivery is ever left unacknowledged.
    pub async fn run(mut self) -> lapin::Result<()> {
        while let Some(delivery) = self.deliveries.next().await {
            let delivery = delivery?;

            match decode(&delivery.data) {
                Ok(snapshot) => {
                    log::debug!(
                        "snapshot for leaderboard '{}' at {}",
                        snapshot.id,
                        snapshot.entry.time
                    );
                    self.store.upsert(snapshot);
                }
                Err(err) => {
                    log::warn!("dropping undecodable message: {}", err);
                }
            }

            delivery.ack(BasicAckOptions::default()).await?;
        }

        Ok(())
    }
}
