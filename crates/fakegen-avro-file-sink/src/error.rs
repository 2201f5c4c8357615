//! Error types for the Avro file sink.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvroFileSinkError {
    /// The output file could not be created.
    #[error("cannot open output file {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to encode against its schema, or a flush failed.
    #[error("avro write failed: {0}")]
    Encoding(#[from] apache_avro::Error),

    /// A write was attempted after `close`.
    #[error("sink is already closed")]
    Closed,
}
