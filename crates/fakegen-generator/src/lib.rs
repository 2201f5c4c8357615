//! Correlated record stream generation.
//!
//! This crate owns the population model that keeps the profile and
//! access-event streams mutually consistent:
//!
//! - [`EntityPool`] holds every profile known during a run and supports
//!   uniform random selection.
//! - [`synth`] assembles a [`fakegen_records::Profile`] or
//!   [`fakegen_records::AccessEvent`] from fake field values.
//! - [`CorrelatedGenerator`] drives both: each step either mints a new
//!   profile (10%) or reuses a pooled one (90%), and emits an access event
//!   referencing it with a monotonically advancing timestamp.

mod pool;
mod stream;
pub mod synth;

pub use pool::EntityPool;
pub use stream::{CorrelatedGenerator, GeneratorError};
