//! Run controller for the fake-traffic generator.
//!
//! Drives a fixed sequence against an already-seeded
//! [`CorrelatedGenerator`] and an already-opened sink: drain every seeded
//! profile in pool order, then pull `count` correlated pairs and route them
//! to the sink. The caller owns opening and closing the sink so that close
//! runs on every exit path.

use anyhow::Context;
use fakegen_generator::CorrelatedGenerator;
use fakegen_sink::RecordSink;
use rand::Rng;
use tracing::{debug, info, warn};

/// Drain the seeded population, then generate and write `count` access
/// events with their occasional new profiles.
///
/// Within a step the event is written before the profile it may have minted.
/// That matches the established output ordering, which downstream consumers
/// reading the two streams independently may rely on; a consumer can
/// therefore observe an event slightly ahead of its profile.
///
/// Generation failures abort the run; per-record write failures are logged
/// and skipped, since one lost record does not distort the stream's shape.
pub async fn run<R: Rng>(
    generator: &mut CorrelatedGenerator<R>,
    sink: &mut dyn RecordSink,
    count: u64,
) -> anyhow::Result<()> {
    let seeded = generator.pool().len();
    for profile in generator.pool().all() {
        if let Err(e) = sink.write_profile(profile).await {
            warn!("failed to write seeded profile {}: {e:#}", profile.entity_id);
        }
    }
    info!("wrote {seeded} seeded profiles");

    info!("writing {count} access events");
    for i in 0..count {
        let (minted, event) = generator
            .generate_next()
            .context("event generation failed")?;

        if let Err(e) = sink.write_event(&event).await {
            warn!("failed to write access event for {}: {e:#}", event.entity_id);
        }
        if let Some(profile) = minted {
            if let Err(e) = sink.write_profile(&profile).await {
                warn!("failed to write new profile {}: {e:#}", profile.entity_id);
            }
        }

        if (i + 1) % 10_000 == 0 {
            debug!("generated {} of {count} access events", i + 1);
        }
    }
    info!("wrote access events and new profiles");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use fakegen_records::{AccessEvent, Profile};

    #[derive(Debug, PartialEq)]
    enum Written {
        Profile(String),
        Event(String),
    }

    /// Sink recording write order in memory, optionally failing event writes.
    #[derive(Default)]
    struct MemorySink {
        writes: Vec<Written>,
        fail_events: bool,
    }

    #[async_trait::async_trait]
    impl RecordSink for MemorySink {
        async fn write_profile(&mut self, profile: &Profile) -> anyhow::Result<()> {
            self.writes.push(Written::Profile(profile.entity_id.clone()));
            Ok(())
        }

        async fn write_event(&mut self, event: &AccessEvent) -> anyhow::Result<()> {
            if self.fail_events {
                return Err(anyhow!("event write rejected"));
            }
            self.writes.push(Written::Event(event.entity_id.clone()));
            Ok(())
        }

        async fn close(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_drain_precedes_events_and_event_precedes_minted_profile() {
        let mut generator = CorrelatedGenerator::seeded(42);
        generator.seed_pool(5).unwrap();
        let seeded_ids: Vec<String> = generator
            .pool()
            .all()
            .map(|p| p.entity_id.clone())
            .collect();

        let mut sink = MemorySink::default();
        run(&mut generator, &mut sink, 300).await.unwrap();

        // Seeded profiles come first, in pool order
        for (i, id) in seeded_ids.iter().enumerate() {
            assert_eq!(sink.writes[i], Written::Profile(id.clone()));
        }

        // After the drain, every profile write follows the event that minted
        // it, with matching entity ids
        let mut events = 0u64;
        for i in seeded_ids.len()..sink.writes.len() {
            match &sink.writes[i] {
                Written::Event(_) => events += 1,
                Written::Profile(id) => match &sink.writes[i - 1] {
                    Written::Event(event_id) => assert_eq!(event_id, id),
                    other => panic!("profile {id} not preceded by its event: {other:?}"),
                },
            }
        }
        assert_eq!(events, 300);
    }

    #[tokio::test]
    async fn test_event_write_failures_do_not_abort_the_run() {
        let mut generator = CorrelatedGenerator::seeded(42);
        generator.seed_pool(3).unwrap();

        let mut sink = MemorySink {
            fail_events: true,
            ..MemorySink::default()
        };
        run(&mut generator, &mut sink, 50).await.unwrap();

        // Only profile writes made it through
        assert!(sink
            .writes
            .iter()
            .all(|w| matches!(w, Written::Profile(_))));
    }
}
