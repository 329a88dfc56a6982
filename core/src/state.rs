//! The per-quarter financial record.
//!
//! RULES:
//!   - One FinancialState per quarter index, append-only, never mutated
//!     after it enters the history.
//!   - capital, loans, and deposits never go negative; the engine clamps
//!     at zero.
//!   - tier1 and roe are recomputed from the current figures every step,
//!     never carried over stale.
//!   - Values are carried at full precision between quarters; rounding
//!     is a presentation concern.

use crate::config::EngineConfig;
use crate::decision::BusinessLine;
use crate::engine::{return_on_equity, tier1_ratio};
use crate::types::{quarter_label, year_of, QuarterIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialState {
    pub quarter_index: QuarterIndex,
    pub year: i32,
    pub quarter_label: String,

    // ── Balance sheet ──────────────────────────────────────────────
    /// Shareholders' equity.
    pub capital: f64,
    pub loans: f64,
    pub deposits: f64,
    pub assets: f64,
    pub liabilities: f64,

    // ── Carried ratios and pricing ─────────────────────────────────
    /// Base lending rate, percent.
    pub interest_rate: f64,
    /// Operating expense as a percent of revenue.
    pub operating_cost_ratio: f64,
    /// Loan-loss provisioning rate, percent of loans.
    pub provision_ratio: f64,

    // ── Quarterly income statement ─────────────────────────────────
    /// Recurring fee income from advisory and wealth lines.
    pub ria_fee_income: f64,
    pub net_interest_income: f64,
    pub revenue: f64,
    pub expenses: f64,
    pub provisions: f64,
    pub net_income: f64,

    // ── Business lines ─────────────────────────────────────────────
    pub lines: LineBook,

    // ── Derived ratios, percent ────────────────────────────────────
    pub tier1: f64,
    pub roe: f64,

    /// Narrative attached by the feedback generator.
    /// Empty on the seed record.
    pub feedback: String,
}

/// The bank's business-line book. Activation order is preserved; at most
/// one line activates per quarter and effects persist from then on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBook {
    pub active: Vec<BusinessLine>,
    /// Quarterly investment-banking revenue while the line is active.
    pub ib_revenue: f64,
    /// Merchant-banking book, compounds while active.
    pub mb_assets: f64,
    /// Assets under management, compounds while active.
    pub aum: f64,
}

impl LineBook {
    pub fn has(&self, line: BusinessLine) -> bool {
        self.active.contains(&line)
    }
}

impl FinancialState {
    /// The fixed quarter-0 record every game starts from. Never produced
    /// by step(). Figures are the National Iron Bank opening book;
    /// statement detail lines are not reconstructed for the seed quarter.
    pub fn seed(config: &EngineConfig) -> Self {
        let capital = 32.0;
        let loans = 100.0;
        let net_income = 2.5;
        Self {
            quarter_index: 0,
            year: year_of(0),
            quarter_label: quarter_label(0),
            capital,
            loans,
            deposits: 120.0,
            assets: loans,
            liabilities: 120.0,
            interest_rate: 4.0,
            operating_cost_ratio: 60.0,
            provision_ratio: 1.0,
            ria_fee_income: 1.5,
            net_interest_income: 0.0,
            revenue: 0.0,
            expenses: 0.0,
            provisions: 0.0,
            net_income,
            lines: LineBook::default(),
            tier1: tier1_ratio(capital, loans, config.risk_weight_factor),
            roe: return_on_equity(net_income, capital),
            feedback: String::new(),
        }
    }
}
