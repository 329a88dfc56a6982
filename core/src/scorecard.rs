//! Rolling scorecard over the full game history.

use crate::error::{EngineError, EngineResult};
use crate::state::FinancialState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Arithmetic mean ROE over the whole history, seed quarter included.
    pub average_roe: f64,
    pub average_tier1: f64,
    pub cumulative_net_income: f64,
    pub health: HealthLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLabel {
    Weak,
    Stable,
    Strong,
}

impl HealthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Stable => "Stable",
            Self::Strong => "Strong",
        }
    }
}

/// Aggregate the history into headline statistics. Figures are
/// display-rounded to one decimal.
pub fn summarize(history: &[FinancialState]) -> EngineResult<Scorecard> {
    if history.is_empty() {
        return Err(EngineError::EmptyHistory);
    }
    let quarters = history.len() as f64;
    let average_roe = history.iter().map(|s| s.roe).sum::<f64>() / quarters;
    let average_tier1 = history.iter().map(|s| s.tier1).sum::<f64>() / quarters;
    let cumulative_net_income = history.iter().map(|s| s.net_income).sum::<f64>();

    // Weak wins over Strong when the thresholds overlap.
    let health = if average_tier1 < 8.0 || average_roe < 5.0 {
        HealthLabel::Weak
    } else if average_tier1 > 12.0 && average_roe > 10.0 {
        HealthLabel::Strong
    } else {
        HealthLabel::Stable
    };

    Ok(Scorecard {
        average_roe: round1(average_roe),
        average_tier1: round1(average_tier1),
        cumulative_net_income: round1(cumulative_net_income),
        health,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
