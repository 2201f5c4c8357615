//! The correlated profile / access-event stream.

use crate::{synth, EntityPool};
use chrono::{DateTime, Duration, Utc};
use fakegen_faker::FakeSource;
use fakegen_records::{AccessEvent, Profile, ACCESS_LOG_TIME_FORMAT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the per-step decision draw.
const DECISION_RANGE: i32 = 10;
/// Draws above this value mint a new profile: 1 in 10 steps.
const NEW_PROFILE_THRESHOLD: i32 = 8;
/// Upper bound (exclusive) in seconds of the per-step clock advance.
const MAX_CLOCK_STEP_SECS: i64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The synthesizer produced an entity id that already exists in the pool.
    #[error("duplicate entity id: {0}")]
    DuplicateEntityId(String),

    /// `generate_next` was called before the pool was seeded. The pool must
    /// hold at least one profile before event generation starts.
    #[error("entity pool is empty; seed it before generating events")]
    EmptyPool,
}

/// Generator of a referentially consistent stream of profiles and access
/// events.
///
/// Each step biases 90/10 toward reusing an existing profile, so the
/// synthetic traffic looks like returning users with an occasional signup.
/// Event timestamps come from a logical clock that starts at wall-clock time
/// and only moves forward, so they are non-decreasing in emission order.
pub struct CorrelatedGenerator<R: Rng = StdRng> {
    pool: EntityPool,
    faker: FakeSource,
    clock: DateTime<Utc>,
    rng: R,
}

impl CorrelatedGenerator<StdRng> {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(FakeSource::new(), StdRng::from_os_rng(), Utc::now())
    }

    /// Create a deterministic generator (same seed = same stream, apart from
    /// the wall-clock starting point).
    pub fn seeded(seed: u64) -> Self {
        // Decorrelate the decision RNG from the fake value RNG
        Self::with_rng(
            FakeSource::seeded(seed.wrapping_mul(0x9E3779B97F4A7C15)),
            StdRng::seed_from_u64(seed),
            Utc::now(),
        )
    }
}

impl Default for CorrelatedGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CorrelatedGenerator<R> {
    /// Create a generator from explicit parts. Mainly useful for tests that
    /// need to pin the decision RNG or the clock's starting point.
    pub fn with_rng(faker: FakeSource, rng: R, start: DateTime<Utc>) -> Self {
        Self {
            pool: EntityPool::new(),
            faker,
            clock: start,
            rng,
        }
    }

    /// The pool of every profile generated so far.
    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    /// Populate the pool with `count` freshly synthesized profiles.
    pub fn seed_pool(&mut self, count: usize) -> Result<(), GeneratorError> {
        for _ in 0..count {
            let profile = synth::profile(&mut self.faker);
            self.pool.insert(profile)?;
        }
        Ok(())
    }

    /// Produce the next correlated pair.
    ///
    /// Returns `Some(profile)` only when this step minted a new profile; the
    /// event always references either that profile or a pooled one. Fails
    /// with [`GeneratorError::EmptyPool`] if the reuse branch is taken on an
    /// unseeded pool, which is a caller bug rather than a runtime condition.
    pub fn generate_next(&mut self) -> Result<(Option<Profile>, AccessEvent), GeneratorError> {
        let (minted, entity_id) =
            if self.rng.random_range(0..DECISION_RANGE) > NEW_PROFILE_THRESHOLD {
                let profile = synth::profile(&mut self.faker);
                self.pool.insert(profile.clone())?;
                let entity_id = profile.entity_id.clone();
                (Some(profile), entity_id)
            } else {
                let picked = self.pool.pick_random(&mut self.rng)?;
                (None, picked.entity_id.clone())
            };

        let timestamp = self.clock.format(ACCESS_LOG_TIME_FORMAT).to_string();
        self.clock += Duration::seconds(self.rng.random_range(0..MAX_CLOCK_STEP_SECS));

        let event = synth::access_event(&mut self.faker, entity_id, timestamp);
        Ok((minted, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::RngCore;
    use std::collections::HashSet;

    /// RNG returning a fixed bit pattern, to pin the mint-vs-reuse decision.
    /// The constants below sit well inside their decile of the output space
    /// so uniform-range rejection sampling accepts them on the first draw.
    struct ConstRng(u64);

    /// Maps into the bottom decile of `[0, 10)`: always reuse.
    const REUSE_DRAW: u64 = 1_000_000;
    /// Maps into the top decile of `[0, 10)`: always mint.
    const MINT_DRAW: u64 = 4_000_000_000;

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.0.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_reuse_branch_returns_pooled_entity() {
        // Bottom-decile draws always take the reuse branch
        let mut generator =
            CorrelatedGenerator::with_rng(FakeSource::seeded(1), ConstRng(REUSE_DRAW), start_time());
        generator.seed_pool(1).unwrap();
        let seeded_id = generator.pool().all().next().unwrap().entity_id.clone();

        let (minted, event) = generator.generate_next().unwrap();
        assert!(minted.is_none());
        assert_eq!(event.entity_id, seeded_id);
    }

    #[test]
    fn test_reuse_branch_on_empty_pool_fails() {
        let mut generator =
            CorrelatedGenerator::with_rng(FakeSource::seeded(1), ConstRng(REUSE_DRAW), start_time());

        assert!(matches!(
            generator.generate_next(),
            Err(GeneratorError::EmptyPool)
        ));
    }

    #[test]
    fn test_mint_branch_returns_new_profile() {
        // Top-decile draws always mint
        let mut generator = CorrelatedGenerator::with_rng(
            FakeSource::seeded(1),
            ConstRng(MINT_DRAW),
            start_time(),
        );

        let (minted, event) = generator.generate_next().unwrap();
        let minted = minted.expect("top-decile draw should mint a profile");
        assert_eq!(event.entity_id, minted.entity_id);
        assert!(generator.pool().contains(&minted.entity_id));
    }

    #[test]
    fn test_events_reference_pooled_entities() {
        let mut generator = CorrelatedGenerator::seeded(42);
        generator.seed_pool(10).unwrap();

        for _ in 0..1_000 {
            let (minted, event) = generator.generate_next().unwrap();
            assert!(generator.pool().contains(&event.entity_id));
            if let Some(profile) = minted {
                assert_eq!(profile.entity_id, event.entity_id);
            }
        }
    }

    #[test]
    fn test_entity_ids_are_distinct() {
        let mut generator = CorrelatedGenerator::seeded(42);
        generator.seed_pool(1_000).unwrap();
        for _ in 0..2_000 {
            generator.generate_next().unwrap();
        }

        let ids: HashSet<&str> = generator.pool().all().map(|p| p.entity_id.as_str()).collect();
        assert_eq!(ids.len(), generator.pool().len());
    }

    #[test]
    fn test_timestamps_non_decreasing_with_bounded_step() {
        let mut generator = CorrelatedGenerator::seeded(42);
        generator.seed_pool(10).unwrap();

        let mut previous: Option<DateTime<chrono::FixedOffset>> = None;
        for _ in 0..1_000 {
            let (_, event) = generator.generate_next().unwrap();
            let parsed =
                DateTime::parse_from_str(&event.timestamp, ACCESS_LOG_TIME_FORMAT).unwrap();
            if let Some(prev) = previous {
                let delta = parsed.signed_duration_since(prev).num_seconds();
                assert!((0..MAX_CLOCK_STEP_SECS).contains(&delta), "delta {delta}");
            }
            previous = Some(parsed);
        }
    }

    #[test]
    fn test_mint_ratio_converges_to_one_in_ten() {
        let mut generator = CorrelatedGenerator::seeded(7);
        generator.seed_pool(1).unwrap();

        let trials = 100_000u32;
        let mut minted = 0u32;
        for _ in 0..trials {
            if generator.generate_next().unwrap().0.is_some() {
                minted += 1;
            }
        }

        let ratio = f64::from(minted) / f64::from(trials);
        assert!((0.09..=0.11).contains(&ratio), "mint ratio {ratio}");
    }
}
