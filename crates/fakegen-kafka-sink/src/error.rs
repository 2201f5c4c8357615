//! Error types for the Kafka sinks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KafkaSinkError {
    /// The producer could not be created, which is fatal for the run.
    #[error("kafka producer unavailable: {0}")]
    Unavailable(#[source] rdkafka::error::KafkaError),

    /// Enqueue or flush failed at the transport level.
    #[error("kafka transport error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// A record failed to encode against the registered Avro schema.
    #[error("avro wire encoding failed: {0}")]
    AvroEncoding(String),

    /// A record failed to encode as JSON.
    #[error("json encoding failed: {0}")]
    JsonEncoding(#[from] serde_json::Error),
}
