//! Avro object container file sink.
//!
//! Writes profiles and access events to two append-only Avro container
//! files, one per record type, with the canonical schema embedded in each
//! file header. This is the default output and needs no external services.

mod error;
mod file_sink;

pub use error::AvroFileSinkError;
pub use file_sink::{AvroFileSink, EVENT_FILE_NAME, PROFILE_FILE_NAME};
