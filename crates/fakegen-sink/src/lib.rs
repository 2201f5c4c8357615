//! Record sink trait abstraction.
//!
//! This crate defines the `RecordSink` trait that abstracts over the output
//! transports (Avro container files, binary Kafka topics, JSON Kafka
//! topics). The run controller is written against this interface so the
//! output can be selected at startup without any transport knowledge leaking
//! into the generation loop.

mod traits;

pub use traits::RecordSink;
