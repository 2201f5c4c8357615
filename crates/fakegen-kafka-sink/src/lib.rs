//! Kafka topic sinks.
//!
//! Two sinks publish the same logical records to Kafka with `entity_id` as
//! the message key, so all events of one entity land on one partition:
//!
//! - [`KafkaAvroSink`] encodes records in the Confluent Avro wire format and
//!   registers the canonical schemas with a schema registry.
//! - [`KafkaJsonSink`] encodes the same schema as JSON text on separate
//!   topics, reusing one encode buffer per record type.
//!
//! Sends are fire-and-forget enqueues into the producer; delivery retries
//! and backoff belong to the Kafka client, and `close` flushes whatever is
//! still queued.

mod binary;
mod encoder;
mod error;
mod json;

pub use binary::{KafkaAvroSink, EVENT_TOPIC, PROFILE_TOPIC};
pub use encoder::JsonEncoder;
pub use error::KafkaSinkError;
pub use json::{KafkaJsonSink, EVENT_TOPIC_JSON, PROFILE_TOPIC_JSON};

use rdkafka::ClientConfig;

/// Producer configuration shared by both Kafka sinks.
fn client_config(brokers: &str) -> ClientConfig {
    let mut config = ClientConfig::new();
    config
        .set("bootstrap.servers", brokers)
        .set("message.timeout.ms", "30000")
        .set("queue.buffering.max.messages", "100000")
        .set("linger.ms", "5");
    config
}
