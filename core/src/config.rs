//! Engine constants — every figure the quarterly transition touches.
//!
//! The defaults below are the canonical formula set. The source material
//! this game descends from carried several mutually inconsistent variants
//! of these constants; the choices here are recorded in DESIGN.md and
//! pinned by the tests, so change them deliberately.

use crate::decision::BusinessLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // ── Decision clamps ────────────────────────────────────────────
    /// Band for Decision::rate_change, percentage points per quarter.
    pub rate_change_min: f64,
    pub rate_change_max: f64,
    /// Band for Decision::cost_adjustment, ratio points per quarter.
    pub cost_adjustment_min: f64,
    pub cost_adjustment_max: f64,

    // ── Volume growth (percent per quarter) ────────────────────────
    /// Loan growth per point of scenario GDP growth.
    pub loan_demand_factor: f64,
    /// Deposit growth per point of scenario GDP growth.
    pub deposit_flow_factor: f64,
    /// Extra growth on both books when the player expands.
    pub expansion_growth_bonus: f64,
    /// Operating-cost-ratio points an expansion quarter adds.
    pub expansion_cost_bump: f64,
    /// Growth delta for loosened risk tolerance (negated when tightened).
    pub risk_growth_delta: f64,
    /// Provision-ratio delta for loosened risk tolerance (negated when
    /// tightened; the ratio floors at zero).
    pub risk_provision_delta: f64,
    /// Loan growth per point of applied rate change. Negative: raising
    /// rates cools loan demand.
    pub loan_rate_sensitivity: f64,
    /// Deposit growth per point of applied rate change. Positive:
    /// raising rates attracts deposits.
    pub deposit_rate_sensitivity: f64,

    // ── Income statement ───────────────────────────────────────────
    /// Percentage points between the lending rate and what deposits
    /// cost; the deposit rate floors at zero.
    pub funding_spread: f64,
    /// Annual-to-quarter scaling on interest and provision flows.
    pub quarter_fraction: f64,
    /// Operating-cost-ratio points per point of scenario inflation.
    pub cost_inflation_factor: f64,
    /// Band the operating cost ratio is clamped to.
    pub cost_ratio_min: f64,
    pub cost_ratio_max: f64,

    // ── Capital and ratios ─────────────────────────────────────────
    /// Share of net income retained into capital each quarter.
    pub retention_fraction: f64,
    /// Loans are scaled by this factor to form risk-weighted assets,
    /// the Tier-1 denominator.
    pub risk_weight_factor: f64,

    // ── Business-line book growth (percent per quarter) ────────────
    pub aum_growth_rate: f64,
    pub mb_asset_growth_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate_change_min: -2.0,
            rate_change_max: 2.0,
            cost_adjustment_min: -5.0,
            cost_adjustment_max: 5.0,

            loan_demand_factor: 0.8,
            deposit_flow_factor: 0.6,
            expansion_growth_bonus: 1.5,
            expansion_cost_bump: 0.5,
            risk_growth_delta: 1.0,
            risk_provision_delta: 0.25,
            loan_rate_sensitivity: -0.5,
            deposit_rate_sensitivity: 0.3,

            funding_spread: 1.5,
            quarter_fraction: 0.25,
            cost_inflation_factor: 0.15,
            cost_ratio_min: 30.0,
            cost_ratio_max: 90.0,

            retention_fraction: 0.6,
            risk_weight_factor: 2.0,

            aum_growth_rate: 3.0,
            mb_asset_growth_rate: 5.0,
        }
    }
}

impl EngineConfig {
    /// One-time effects of launching a business line. Fee income and the
    /// cost bump land in the activation quarter and persist through the
    /// carried ratios; seeded book figures then compound on their own.
    pub fn line_effects(&self, line: BusinessLine) -> LineEffects {
        match line {
            BusinessLine::WealthManagement => LineEffects {
                fee_income_increment: 0.5,
                cost_ratio_increment: 0.3,
                recurring_revenue: 0.0,
                seeds_aum: 25.0,
                seeds_mb_assets: 0.0,
            },
            BusinessLine::InvestmentBanking => LineEffects {
                fee_income_increment: 0.4,
                cost_ratio_increment: 0.5,
                recurring_revenue: 0.8,
                seeds_aum: 0.0,
                seeds_mb_assets: 0.0,
            },
            BusinessLine::MerchantBanking => LineEffects {
                fee_income_increment: 0.2,
                cost_ratio_increment: 0.4,
                recurring_revenue: 0.0,
                seeds_aum: 0.0,
                seeds_mb_assets: 10.0,
            },
            BusinessLine::Insurance => LineEffects {
                fee_income_increment: 0.6,
                cost_ratio_increment: 0.2,
                recurring_revenue: 0.0,
                seeds_aum: 0.0,
                seeds_mb_assets: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEffects {
    /// Added to recurring advisory fee income once, at activation.
    pub fee_income_increment: f64,
    /// Added to the operating cost ratio once, at activation.
    pub cost_ratio_increment: f64,
    /// Revenue the line contributes every quarter while active.
    pub recurring_revenue: f64,
    /// Assets under management the line starts with.
    pub seeds_aum: f64,
    /// Merchant-banking book the line starts with.
    pub seeds_mb_assets: f64,
}
