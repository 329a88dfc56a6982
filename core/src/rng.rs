//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through GameRng instances derived from the
//! single master seed held by the session.
//!
//! Each randomized component gets its own stream, seeded
//! deterministically from (master_seed XOR stream_index). This means:
//!   - Adding a new stream never changes existing streams.
//!   - Each stream is fully reproducible in isolation.
//!   - A per-quarter stream replays identically for the same
//!     (seed, stream, quarter) triple, which is what makes scenario
//!     and benchmark generation testable.

use crate::types::QuarterIndex;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single component.
pub struct GameRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GameRng {
    /// Create a component RNG from the master seed and a stable stream
    /// index. The index must never change once assigned.
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick() on empty slice");
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    Scenario = 0,
    Competitor = 1,
    // Add new streams here — append only.
}

impl RngStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scenario => "scenario",
            Self::Competitor => "competitor",
        }
    }
}

/// All component RNGs for a single session, derived from the master seed.
#[derive(Clone, Copy, Debug)]
pub struct RngStreams {
    master_seed: u64,
}

impl RngStreams {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn seed(&self) -> u64 {
        self.master_seed
    }

    /// The stream for a component, positioned at its start.
    pub fn stream(&self, stream: RngStream) -> GameRng {
        GameRng::new(self.master_seed, stream as u64).with_name(stream.name())
    }

    /// A per-quarter stream: the same (seed, stream, quarter) triple
    /// always yields the same draw sequence.
    pub fn stream_for_quarter(&self, stream: RngStream, index: QuarterIndex) -> GameRng {
        let mixed = self
            .master_seed
            .wrapping_add((index as u64 + 1).wrapping_mul(0xd1b5_4a32_d192_ed03));
        GameRng::new(mixed, stream as u64).with_name(stream.name())
    }
}
