//! JSON topic sink.

use crate::{client_config, JsonEncoder, KafkaSinkError};
use fakegen_records::{AccessEvent, Profile};
use fakegen_sink::RecordSink;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use std::time::Duration;
use tracing::info;

/// Topic for JSON-encoded profiles, distinct from the binary topic.
pub const PROFILE_TOPIC_JSON: &str = "profile_json";
/// Topic for JSON-encoded access events.
pub const EVENT_TOPIC_JSON: &str = "access_event_json";

/// Sink publishing records as JSON text to Kafka, keyed by `entity_id`.
///
/// Each record type keeps its own [`JsonEncoder`] so the two streams never
/// share a buffer.
pub struct KafkaJsonSink {
    producer: FutureProducer,
    profile_encoder: JsonEncoder,
    event_encoder: JsonEncoder,
}

impl KafkaJsonSink {
    /// Create the producer. Fails fast if the client cannot be constructed.
    pub fn connect(brokers: &str) -> Result<Self, KafkaSinkError> {
        let producer: FutureProducer = client_config(brokers)
            .create()
            .map_err(KafkaSinkError::Unavailable)?;

        info!(
            "publishing json records to topics {PROFILE_TOPIC_JSON} and {EVENT_TOPIC_JSON} via {brokers}"
        );

        Ok(Self {
            producer,
            profile_encoder: JsonEncoder::new(),
            event_encoder: JsonEncoder::new(),
        })
    }

}

#[async_trait::async_trait]
impl RecordSink for KafkaJsonSink {
    async fn write_profile(&mut self, profile: &Profile) -> anyhow::Result<()> {
        let payload = self.profile_encoder.encode(profile)?;
        let record = FutureRecord::to(PROFILE_TOPIC_JSON)
            .key(profile.entity_id.as_str())
            .payload(payload);
        // Fire-and-forget: the delivery future is dropped, queued messages
        // are flushed on close
        self.producer
            .send_result(record)
            .map_err(|(err, _)| KafkaSinkError::Kafka(err))?;
        Ok(())
    }

    async fn write_event(&mut self, event: &AccessEvent) -> anyhow::Result<()> {
        let payload = self.event_encoder.encode(event)?;
        let record = FutureRecord::to(EVENT_TOPIC_JSON)
            .key(event.entity_id.as_str())
            .payload(payload);
        self.producer
            .send_result(record)
            .map_err(|(err, _)| KafkaSinkError::Kafka(err))?;
        Ok(())
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.producer.flush(Duration::from_secs(30))?;
        Ok(())
    }
}
