//! RecordSink trait definition.

use anyhow::Result;
use fakegen_records::{AccessEvent, Profile};

/// Destination for generated records.
///
/// Implementations acquire their transport resources (file handles, producer
/// connections) in their constructor and fail fast there: a sink that cannot
/// open is fatal for the run, there is no degraded mode. Both record types
/// are encoded against the shared canonical schema, so consumers of any one
/// transport see the same logical records.
///
/// # Usage pattern
///
/// The run controller drives a `Box<dyn RecordSink>` chosen once at startup:
///
/// ```ignore
/// let mut sink: Box<dyn RecordSink> = match output {
///     OutputKind::FileAvro => Box::new(AvroFileSink::open(&dir)?),
///     ...
/// };
/// sink.write_profile(&profile).await?;
/// sink.close().await?;
/// ```
#[async_trait::async_trait]
pub trait RecordSink: Send {
    /// Encode and deliver one profile.
    async fn write_profile(&mut self, profile: &Profile) -> Result<()>;

    /// Encode and deliver one access event.
    async fn write_event(&mut self, event: &AccessEvent) -> Result<()>;

    /// Flush buffered data and release transport resources.
    ///
    /// Called exactly once per opened sink, on every exit path including the
    /// one that aborts the run.
    async fn close(&mut self) -> Result<()>;
}
