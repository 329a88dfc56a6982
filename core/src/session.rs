//! Game session — the owner of the append-only quarter history.
//!
//! The UI layer reduces to: collect a Decision, call advance(), render
//! the returned entry. The session enforces what the pure engine cannot
//! see: the seed record comes first, exactly one entry per quarter, the
//! game horizon, and the pairing of each step with its scenario and
//! feedback. advance() takes &mut self, so two quarters can never be
//! submitted concurrently against the same history.

use crate::{
    competitors::{self, PeerBank},
    config::EngineConfig,
    decision::Decision,
    engine,
    error::{EngineError, EngineResult},
    feedback,
    rng::{RngStream, RngStreams},
    scenario::{CycleScenarios, RandomScenarios, Scenario, ScenarioSource},
    scorecard::{self, Scorecard},
    state::FinancialState,
    types::{QuarterIndex, SessionId, GAME_HORIZON},
};

pub struct GameSession<S: ScenarioSource> {
    pub session_id: SessionId,
    pub bank_name: String,
    streams: RngStreams,
    config: EngineConfig,
    scenarios: S,
    history: Vec<FinancialState>,
    horizon: QuarterIndex,
}

impl GameSession<RandomScenarios> {
    /// A full-length session on the randomized economy.
    pub fn seeded(master_seed: u64) -> Self {
        let streams = RngStreams::new(master_seed);
        Self::with_source(
            master_seed,
            RandomScenarios::new(streams),
            EngineConfig::default(),
            GAME_HORIZON,
        )
    }
}

impl GameSession<CycleScenarios> {
    /// A full-length session on the deterministic scripted economy. The
    /// seed still drives the competitor table.
    pub fn scripted(master_seed: u64) -> Self {
        Self::with_source(
            master_seed,
            CycleScenarios,
            EngineConfig::default(),
            GAME_HORIZON,
        )
    }
}

impl<S: ScenarioSource> GameSession<S> {
    pub fn with_source(
        master_seed: u64,
        scenarios: S,
        config: EngineConfig,
        horizon: QuarterIndex,
    ) -> Self {
        let seed_state = FinancialState::seed(&config);
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            bank_name: "National Iron Bank".to_string(),
            streams: RngStreams::new(master_seed),
            config,
            scenarios,
            history: vec![seed_state],
            horizon,
        }
    }

    pub fn history(&self) -> &[FinancialState] {
        &self.history
    }

    pub fn latest(&self) -> &FinancialState {
        self.history.last().expect("session history is never empty")
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn master_seed(&self) -> u64 {
        self.streams.seed()
    }

    /// Quarters played so far, seed quarter included.
    pub fn quarters_played(&self) -> QuarterIndex {
        self.history.len() as QuarterIndex
    }

    pub fn is_complete(&self) -> bool {
        self.quarters_played() >= self.horizon
    }

    /// The scenario the next advance() will play, for display before
    /// the player commits their decisions.
    pub fn upcoming_scenario(&mut self) -> Option<Scenario> {
        if self.is_complete() {
            return None;
        }
        Some(
            self.scenarios
                .scenario_for(self.latest().quarter_index + 1),
        )
    }

    /// Play one quarter: pull the scenario, step the engine, attach the
    /// boardroom feedback, append. Returns the new history entry.
    pub fn advance(&mut self, decisions: &Decision) -> EngineResult<&FinancialState> {
        if self.is_complete() {
            return Err(EngineError::GameOver {
                horizon: self.horizon,
            });
        }

        let next_index = self.latest().quarter_index + 1;
        let scenario = self.scenarios.scenario_for(next_index);
        let mut state = engine::step(&self.history, decisions, &scenario, &self.config)?;

        let reasons = feedback::assess(&state, self.latest(), decisions, &scenario);
        state.feedback = feedback::render(&reasons);

        log::info!(
            "{} [{}]: net income {:.2}, ROE {:.1}%, Tier-1 {:.1}%",
            state.quarter_label,
            self.bank_name,
            state.net_income,
            state.roe,
            state.tier1
        );

        self.history.push(state);
        Ok(self.latest())
    }

    pub fn scorecard(&self) -> EngineResult<Scorecard> {
        scorecard::summarize(&self.history)
    }

    /// The peer table for the latest played quarter.
    pub fn benchmarks(&self) -> Vec<PeerBank> {
        self.benchmarks_for(self.latest().quarter_index)
    }

    pub fn benchmarks_for(&self, index: QuarterIndex) -> Vec<PeerBank> {
        let mut rng = self
            .streams
            .stream_for_quarter(RngStream::Competitor, index);
        competitors::benchmarks(index, &mut rng)
    }
}
