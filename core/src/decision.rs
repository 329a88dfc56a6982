//! Player decisions — the strategy snapshot submitted once per quarter.
//!
//! RULE: The engine clamps out-of-range numeric fields to the configured
//! bands instead of rejecting them. A decision is consumed by one step()
//! call and discarded; only its effects survive in the history entry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Base-rate move in percentage points. Clamped to the configured
    /// band (default [-2, +2]) before anything else happens.
    pub rate_change: f64,
    pub expansion: Expansion,
    pub risk_tolerance: RiskTolerance,
    /// At most one new business line per quarter; lines already active
    /// are ignored. Prior lines' effects persist in state.
    pub new_line: Option<BusinessLine>,
    /// Direct operating-cost-ratio adjustment in points, if the player
    /// targets one. Clamped to the configured band (default [-5, +5]).
    pub cost_adjustment: Option<f64>,
}

impl Decision {
    /// The neutral decision: no rate move, no expansion, maintain risk,
    /// no new line. Baseline for tests and the "hold" runner policy.
    pub fn hold() -> Self {
        Self {
            rate_change: 0.0,
            expansion: Expansion::No,
            risk_tolerance: RiskTolerance::Maintain,
            new_line: None,
            cost_adjustment: None,
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Self::hold()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    No,
    Yes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Tighten,
    Maintain,
    Loosen,
}

/// Fee-generating business lines the bank can launch.
/// Variants are added per line — never removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLine {
    WealthManagement,
    InvestmentBanking,
    MerchantBanking,
    Insurance,
}

impl BusinessLine {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WealthManagement => "Wealth Management",
            Self::InvestmentBanking => "Investment Banking",
            Self::MerchantBanking => "Merchant Banking",
            Self::Insurance => "Insurance",
        }
    }
}
