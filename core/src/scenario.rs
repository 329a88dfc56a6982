//! Exogenous economic scenarios.
//!
//! The engine consumes the numeric Scenario record and nothing else;
//! whether it came from the scripted catalog or a seeded draw is the
//! source's business. Both sources here replay identically for the same
//! (seed, quarter) pair — there is no ambient randomness.

use crate::rng::{GameRng, RngStream, RngStreams};
use crate::types::{quarter_label, QuarterIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Annualized GDP growth, percent.
    pub gdp_growth: f64,
    /// Annualized inflation, percent.
    pub inflation: f64,
    /// Exogenous move in the base rate this quarter, percentage points.
    pub rate_drift: f64,
    pub risk_environment: RiskEnvironment,
    pub shock: Option<Shock>,
    pub narrative: String,
}

impl Scenario {
    /// Flat conditions: moderate growth, no inflation pressure, no rate
    /// drift, no shock. The anchor for baseline tests.
    pub fn neutral() -> Self {
        Self {
            gdp_growth: 2.0,
            inflation: 0.0,
            rate_drift: 0.0,
            risk_environment: RiskEnvironment::Stable,
            shock: None,
            narrative: "Conditions hold steady with moderate growth.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskEnvironment {
    Stable,
    Elevated,
    Improving,
    Uncertain,
    Recessionary,
}

impl RiskEnvironment {
    /// Provisioning pressure in ratio points per quarter.
    pub fn provision_pressure(&self) -> f64 {
        match self {
            Self::Stable => 0.0,
            Self::Improving => -0.1,
            Self::Uncertain => 0.1,
            Self::Elevated => 0.2,
            Self::Recessionary => 0.5,
        }
    }
}

/// A discrete event layered on top of the quarter's baseline conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shock {
    pub label: String,
    /// Carried verbatim into the quarter's feedback.
    pub narrative_impact: String,
    #[serde(default)]
    pub adjustments: ShockAdjustments,
}

/// Numeric deltas a shock applies on top of the baseline transition.
/// All default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockAdjustments {
    /// Percentage points added to the rate drift.
    pub rate_drift: f64,
    /// Percentage points added to quarterly loan growth.
    pub loan_growth: f64,
    /// Percentage points added to quarterly deposit growth.
    pub deposit_growth: f64,
    /// Ratio points added to the provision ratio.
    pub provision_ratio: f64,
    /// Ratio points added to the operating cost ratio.
    pub cost_ratio: f64,
}

/// Produces the scenario for a quarter index.
pub trait ScenarioSource {
    fn scenario_for(&mut self, index: QuarterIndex) -> Scenario;
}

const NARRATIVES: &[&str] = &[
    "The Fed holds rates steady amid soft-landing hopes.",
    "Volatility rises on global trade tensions.",
    "Strong job growth fuels moderate inflation.",
    "Consumer confidence declines as credit tightens.",
    "Markets stabilize following energy price shocks.",
    "Liquidity improves with easing Fed policy.",
    "Regional banks face pressure on deposits.",
    "Technology sector rallies, boosting equities.",
    "Commercial real estate worries resurface.",
    "Inflation fears mount with rising wages.",
];

fn shock_catalog() -> Vec<Shock> {
    vec![
        Shock {
            label: "Interest Rate Spike".to_string(),
            narrative_impact: "Unexpected rate hike by the Fed impacts borrowing demand."
                .to_string(),
            adjustments: ShockAdjustments {
                rate_drift: 1.0,
                loan_growth: -1.0,
                ..ShockAdjustments::default()
            },
        },
        Shock {
            label: "Deposit Flight".to_string(),
            narrative_impact: "Depositors move to money markets, straining funding.".to_string(),
            adjustments: ShockAdjustments {
                rate_drift: -0.5,
                deposit_growth: -2.0,
                ..ShockAdjustments::default()
            },
        },
        Shock {
            label: "Regulatory Crackdown".to_string(),
            narrative_impact: "Increased compliance costs affect profitability.".to_string(),
            adjustments: ShockAdjustments {
                rate_drift: 0.1,
                cost_ratio: 1.0,
                ..ShockAdjustments::default()
            },
        },
    ]
}

/// Deterministic catalog: conditions cycle through fixed tables keyed by
/// quarter index. Two sessions on the scripted source see identical
/// economies regardless of seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleScenarios;

/// (gdp_growth, inflation, rate_drift, risk_environment) per quarter,
/// cycled. A loose business cycle: expansion, heat, slowdown, recovery.
const CYCLE: &[(f64, f64, f64, RiskEnvironment)] = &[
    (2.4, 2.5, 0.0, RiskEnvironment::Stable),
    (3.1, 3.2, 0.25, RiskEnvironment::Stable),
    (2.8, 3.6, 0.25, RiskEnvironment::Elevated),
    (1.8, 3.0, 0.0, RiskEnvironment::Uncertain),
    (0.6, 2.2, -0.25, RiskEnvironment::Elevated),
    (-0.5, 1.6, -0.5, RiskEnvironment::Recessionary),
    (1.2, 1.8, -0.25, RiskEnvironment::Improving),
    (2.0, 2.1, 0.0, RiskEnvironment::Improving),
];

/// Every Nth quarter of the scripted catalog carries a shock.
const CYCLE_SHOCK_INTERVAL: QuarterIndex = 7;

impl ScenarioSource for CycleScenarios {
    fn scenario_for(&mut self, index: QuarterIndex) -> Scenario {
        let (gdp_growth, inflation, rate_drift, risk_environment) =
            CYCLE[index as usize % CYCLE.len()];
        let shock = if index > 0 && index % CYCLE_SHOCK_INTERVAL == 0 {
            let catalog = shock_catalog();
            Some(catalog[(index / CYCLE_SHOCK_INTERVAL) as usize % catalog.len()].clone())
        } else {
            None
        };
        Scenario {
            gdp_growth,
            inflation,
            rate_drift,
            risk_environment,
            shock,
            narrative: format!(
                "{}: {}",
                quarter_label(index),
                NARRATIVES[index as usize % NARRATIVES.len()]
            ),
        }
    }
}

/// Seeded draws: conditions vary quarter to quarter with a shock roughly
/// every third quarter. Same master seed, same economy.
#[derive(Debug, Clone, Copy)]
pub struct RandomScenarios {
    streams: RngStreams,
}

/// Probability a randomized quarter carries a shock.
const SHOCK_PROBABILITY: f64 = 0.3;

impl RandomScenarios {
    pub fn new(streams: RngStreams) -> Self {
        Self { streams }
    }

    pub fn seeded(master_seed: u64) -> Self {
        Self::new(RngStreams::new(master_seed))
    }

    fn draw_environment(rng: &mut GameRng) -> RiskEnvironment {
        *rng.pick(&[
            RiskEnvironment::Stable,
            RiskEnvironment::Stable,
            RiskEnvironment::Improving,
            RiskEnvironment::Uncertain,
            RiskEnvironment::Elevated,
            RiskEnvironment::Recessionary,
        ])
    }
}

impl ScenarioSource for RandomScenarios {
    fn scenario_for(&mut self, index: QuarterIndex) -> Scenario {
        let mut rng = self
            .streams
            .stream_for_quarter(RngStream::Scenario, index);

        let risk_environment = Self::draw_environment(&mut rng);
        let gdp_growth = match risk_environment {
            RiskEnvironment::Recessionary => rng.uniform(-2.0, 0.5),
            RiskEnvironment::Elevated => rng.uniform(-0.5, 2.0),
            _ => rng.uniform(0.5, 3.5),
        };
        let inflation = rng.uniform(1.0, 4.5);
        let rate_drift = rng.uniform(-0.2, 0.2);
        let shock = if rng.chance(SHOCK_PROBABILITY) {
            Some(rng.pick(&shock_catalog()).clone())
        } else {
            None
        };

        Scenario {
            gdp_growth,
            inflation,
            rate_drift,
            risk_environment,
            shock,
            narrative: format!(
                "{}: {}",
                quarter_label(index),
                NARRATIVES[index as usize % NARRATIVES.len()]
            ),
        }
    }
}
