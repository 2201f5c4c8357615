//! Plausible fake value source.
//!
//! [`FakeSource`] produces plausible-looking strings (names, addresses,
//! phone numbers, URLs, user agents, ...) from word pools and digit
//! patterns. Each value is an independent draw; the source keeps no state
//! beyond its RNG, so with the same seed the same call sequence yields the
//! same values.

mod pools;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PASSWORD_LEN: usize = 12;
const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of plausible fake field values.
pub struct FakeSource {
    rng: StdRng,
}

impl FakeSource {
    /// Create a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic source (same seed = same value sequence).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool[self.rng.random_range(0..pool.len())].to_string()
    }

    /// A string of exactly `count` random digits, no leading zero.
    fn digits(&mut self, count: usize) -> String {
        let mut out = String::with_capacity(count);
        for i in 0..count {
            let low = if i == 0 { 1 } else { 0 };
            out.push(char::from(b'0' + self.rng.random_range(low..10) as u8));
        }
        out
    }

    pub fn first_name(&mut self) -> String {
        self.pick(pools::FIRST_NAMES)
    }

    pub fn last_name(&mut self) -> String {
        self.pick(pools::LAST_NAMES)
    }

    /// A username like `grace.turner.5550123`. The digit suffix keeps the
    /// collision probability negligible even across tens of thousands of
    /// draws.
    pub fn username(&mut self) -> String {
        format!(
            "{}.{}.{}",
            self.first_name().to_lowercase(),
            self.last_name().to_lowercase(),
            self.digits(7)
        )
    }

    /// A full postal address like `42 Birchwood Ave, Springfield, OH 45501`.
    pub fn address(&mut self) -> String {
        format!(
            "{} {} {}, {}, {} {}",
            self.rng.random_range(1..10_000),
            self.pick(pools::STREET_NAMES),
            self.pick(pools::STREET_SUFFIXES),
            self.pick(pools::CITIES),
            self.pick(pools::STATES),
            self.digits(5)
        )
    }

    /// A phone number like `(614) 555-0142`.
    pub fn phone(&mut self) -> String {
        format!(
            "({}) {}-{}",
            self.digits(3),
            self.digits(3),
            self.digits(4)
        )
    }

    /// A random alphanumeric password.
    pub fn password(&mut self) -> String {
        (0..PASSWORD_LEN)
            .map(|_| {
                char::from(PASSWORD_CHARSET[self.rng.random_range(0..PASSWORD_CHARSET.len())])
            })
            .collect()
    }

    /// Subscription terms like `annual` or `payment in advance`.
    pub fn plan_terms(&mut self) -> String {
        self.pick(pools::PLAN_TERMS)
    }

    /// A card-number-shaped token like `4111-1111-1111-1111`.
    pub fn card_number(&mut self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.digits(4),
            self.digits(4),
            self.digits(4),
            self.digits(4)
        )
    }

    /// A public-looking IPv4 address.
    pub fn ipv4(&mut self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.rng.random_range(1..=223u8),
            self.rng.random_range(0..=255u8),
            self.rng.random_range(0..=255u8),
            self.rng.random_range(1..=254u8)
        )
    }

    /// A URL like `https://www.meadowbrook.net/catalog`.
    pub fn url(&mut self) -> String {
        format!(
            "https://www.{}.{}/{}",
            self.pick(pools::DOMAIN_WORDS),
            self.pick(pools::TLDS),
            self.pick(pools::URL_PATHS)
        )
    }

    /// A user-agent string drawn from a pool of real-world agents.
    pub fn user_agent(&mut self) -> String {
        self.pick(pools::USER_AGENTS)
    }
}

impl Default for FakeSource {
    fn default() -> Self {
        Self::new()
    }
}
