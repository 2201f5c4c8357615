//! Canonical Avro schemas for the record types.
//!
//! All three sinks encode against these schemas; only the bytes on the wire
//! differ between them. The schemas are embedded as JSON constants so the
//! container-file sink can write them into file headers and the Kafka binary
//! sink can register them with a schema registry.

use apache_avro::Schema;
use std::sync::LazyLock;

/// Avro schema for [`crate::Profile`] as JSON.
pub const PROFILE_SCHEMA_JSON: &str = r#"{
  "type": "record",
  "name": "Profile",
  "namespace": "fakegen.records",
  "fields": [
    {"name": "entity_id", "type": "string"},
    {"name": "first_name", "type": "string"},
    {"name": "last_name", "type": "string"},
    {"name": "address", "type": "string"},
    {"name": "phone", "type": "string"},
    {"name": "secret", "type": "string"},
    {"name": "plan_tier", "type": "string"},
    {"name": "payment_token", "type": "string"}
  ]
}"#;

/// Avro schema for [`crate::AccessEvent`] as JSON.
pub const ACCESS_EVENT_SCHEMA_JSON: &str = r#"{
  "type": "record",
  "name": "AccessEvent",
  "namespace": "fakegen.records",
  "fields": [
    {"name": "entity_id", "type": "string"},
    {"name": "source_addr", "type": "string"},
    {"name": "timestamp", "type": "string"},
    {"name": "method", "type": {
      "type": "enum",
      "name": "HttpMethod",
      "symbols": ["GET", "POST", "PUT", "DELETE", "HEAD"]
    }},
    {"name": "target", "type": "string"},
    {"name": "status_code", "type": "string"},
    {"name": "user_agent", "type": "string"}
  ]
}"#;

/// Parsed [`PROFILE_SCHEMA_JSON`].
pub static PROFILE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::parse_str(PROFILE_SCHEMA_JSON).expect("profile schema constant is valid Avro")
});

/// Parsed [`ACCESS_EVENT_SCHEMA_JSON`].
pub static ACCESS_EVENT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::parse_str(ACCESS_EVENT_SCHEMA_JSON).expect("access event schema constant is valid Avro")
});
