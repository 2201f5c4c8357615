//! Confluent Avro topic sink.

use crate::{client_config, KafkaSinkError};
use fakegen_records::{AccessEvent, Profile, ACCESS_EVENT_SCHEMA_JSON, PROFILE_SCHEMA_JSON};
use fakegen_sink::RecordSink;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use schema_registry_converter::async_impl::easy_avro::EasyAvroEncoder;
use schema_registry_converter::async_impl::schema_registry::SrSettings;
use schema_registry_converter::schema_registry_common::{
    SchemaType, SubjectNameStrategy, SuppliedSchema,
};
use std::time::Duration;
use tracing::info;

/// Topic for wire-format Avro profiles.
pub const PROFILE_TOPIC: &str = "profile";
/// Topic for wire-format Avro access events.
pub const EVENT_TOPIC: &str = "access_event";

/// Sink publishing records in the Confluent Avro wire format, keyed by
/// `entity_id`.
///
/// The canonical schemas are supplied with each subject strategy, so the
/// first write of a run registers them with the schema registry; after that
/// the encoder reuses the registered id from its cache.
pub struct KafkaAvroSink {
    producer: FutureProducer,
    encoder: EasyAvroEncoder,
    profile_strategy: SubjectNameStrategy,
    event_strategy: SubjectNameStrategy,
}

impl KafkaAvroSink {
    /// Create the producer and the registry-backed encoder. Fails fast if the
    /// Kafka client cannot be constructed; an unreachable registry surfaces
    /// on the first write.
    pub fn connect(brokers: &str, registry_url: &str) -> Result<Self, KafkaSinkError> {
        let producer: FutureProducer = client_config(brokers)
            .create()
            .map_err(KafkaSinkError::Unavailable)?;

        let encoder = EasyAvroEncoder::new(SrSettings::new(registry_url.to_string()));

        info!(
            "publishing avro records to topics {PROFILE_TOPIC} and {EVENT_TOPIC} via {brokers} (registry {registry_url})"
        );

        Ok(Self {
            producer,
            encoder,
            profile_strategy: value_strategy(PROFILE_TOPIC, "Profile", PROFILE_SCHEMA_JSON),
            event_strategy: value_strategy(EVENT_TOPIC, "AccessEvent", ACCESS_EVENT_SCHEMA_JSON),
        })
    }

    fn send(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), KafkaSinkError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);
        // Fire-and-forget: the delivery future is dropped, queued messages
        // are flushed on close
        self.producer
            .send_result(record)
            .map_err(|(err, _)| KafkaSinkError::Kafka(err))?;
        Ok(())
    }
}

fn value_strategy(topic: &str, record_name: &str, schema_json: &str) -> SubjectNameStrategy {
    SubjectNameStrategy::TopicNameStrategyWithSchema(
        topic.to_string(),
        false,
        SuppliedSchema {
            name: Some(format!("fakegen.records.{record_name}")),
            schema_type: SchemaType::Avro,
            schema: schema_json.to_string(),
            references: vec![],
        },
    )
}

#[async_trait::async_trait]
impl RecordSink for KafkaAvroSink {
    async fn write_profile(&mut self, profile: &Profile) -> anyhow::Result<()> {
        let payload = self
            .encoder
            .encode_struct(profile, &self.profile_strategy)
            .await
            .map_err(|e| KafkaSinkError::AvroEncoding(e.to_string()))?;
        self.send(PROFILE_TOPIC, &profile.entity_id, &payload)?;
        Ok(())
    }

    async fn write_event(&mut self, event: &AccessEvent) -> anyhow::Result<()> {
        let payload = self
            .encoder
            .encode_struct(event, &self.event_strategy)
            .await
            .map_err(|e| KafkaSinkError::AvroEncoding(e.to_string()))?;
        self.send(EVENT_TOPIC, &event.entity_id, &payload)?;
        Ok(())
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.producer.flush(Duration::from_secs(30))?;
        Ok(())
    }
}
