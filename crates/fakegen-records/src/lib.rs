//! Canonical record types for the fake-traffic generator.
//!
//! This crate defines the two record types every other crate works with:
//! [`Profile`] (slowly-changing entity) and [`AccessEvent`] (high-volume fact
//! referencing a profile by `entity_id`). It also owns the single canonical
//! Avro schema for each type. All sinks encode against these schemas, so the
//! logical shape of the data is identical regardless of whether it ends up in
//! a container file, a binary Kafka topic, or a JSON Kafka topic.

mod model;
mod schema;

pub use model::{AccessEvent, HttpMethod, Profile, ACCESS_LOG_TIME_FORMAT};
pub use schema::{
    ACCESS_EVENT_SCHEMA, ACCESS_EVENT_SCHEMA_JSON, PROFILE_SCHEMA, PROFILE_SCHEMA_JSON,
};
