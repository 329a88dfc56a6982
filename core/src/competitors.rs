//! Peer benchmarks — comparison figures for a fixed roster of
//! competitor banks.
//!
//! RULE: Peers evolve on their own seasonal cycle plus bounded noise.
//! They never read the player's book — a struggling player does not
//! drag the peer table down with them.

use crate::rng::GameRng;
use crate::types::QuarterIndex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerBank {
    pub name: String,
    pub roe: f64,
    pub tier1: f64,
}

/// (name, base ROE %, base Tier-1 %). Order is the display order.
const ROSTER: &[(&str, f64, f64)] = &[
    ("Summit Federal", 6.0, 11.5),
    ("Coastal Bankcorp", 8.2, 10.8),
    ("Ironclad Trust", 10.4, 12.7),
];

/// Amplitude of the seasonal swing around each base figure.
pub const SEASONAL_AMPLITUDE: f64 = 0.5;
/// Noise is uniform in [-NOISE_BOUND, NOISE_BOUND].
pub const NOISE_BOUND: f64 = 0.5;

/// Benchmark figures for a quarter. The caller supplies the RNG (a
/// per-quarter competitor stream), so the same seed and quarter always
/// reproduce the same table.
pub fn benchmarks(index: QuarterIndex, rng: &mut GameRng) -> Vec<PeerBank> {
    ROSTER
        .iter()
        .map(|(name, roe_base, tier1_base)| PeerBank {
            name: (*name).to_string(),
            roe: fluctuate(*roe_base, index, rng),
            tier1: fluctuate(*tier1_base, index, rng),
        })
        .collect()
}

fn fluctuate(base: f64, index: QuarterIndex, rng: &mut GameRng) -> f64 {
    let seasonal = (index as f64 / 2.0).sin() * SEASONAL_AMPLITUDE;
    let noise = rng.uniform(-NOISE_BOUND, NOISE_BOUND);
    round1(base + seasonal + noise)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
