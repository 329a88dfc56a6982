//! ironbank-core — the simulation core of the National Iron Bank
//! management game.
//!
//! One quarter of play is one call to [`engine::step`]: prior history in,
//! player [`decision::Decision`] and exogenous [`scenario::Scenario`] in,
//! immutable [`state::FinancialState`] out. [`session::GameSession`] owns
//! the append-only history and wires the scenario source, the engine, and
//! the boardroom feedback together; [`scorecard`] and [`competitors`]
//! are read-outs over the result. All randomness is seeded and injected
//! through [`rng`] — a session replays identically from its master seed.

pub mod competitors;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod rng;
pub mod scenario;
pub mod scorecard;
pub mod session;
pub mod state;
pub mod types;
