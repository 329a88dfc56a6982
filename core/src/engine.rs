//! The quarterly state-transition engine — the heart of the game.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Decision clamping
//!   2. Rate update
//!   3. Volume growth
//!   4. Business-line effects
//!   5. Carried-ratio drift (operating cost, provisioning)
//!   6. Income statement
//!   7. Capital rollforward
//!   8. Ratio recomputation
//!
//! RULES:
//!   - step() is pure: identical inputs produce identical output, and
//!     no randomness is drawn here — scenarios arrive fully formed.
//!   - Out-of-range decision fields are clamped, never rejected.
//!   - Degenerate ratios (zero loans, zero capital) collapse to 0,
//!     never NaN or infinity.
//!   - Malformed history is a caller bug and fails fast.

use crate::{
    config::EngineConfig,
    decision::{Decision, Expansion, RiskTolerance},
    error::{EngineError, EngineResult},
    scenario::Scenario,
    state::FinancialState,
    types::{quarter_label, year_of},
};

/// Advance the bank one quarter.
///
/// `history` must be non-empty and strictly ordered with one entry per
/// quarter index; the last entry is the prior quarter. The returned
/// state carries an empty feedback string — the feedback generator
/// fills it in at the session layer.
pub fn step(
    history: &[FinancialState],
    decisions: &Decision,
    scenario: &Scenario,
    config: &EngineConfig,
) -> EngineResult<FinancialState> {
    let prior = validate_history(history)?;
    let quarter_index = prior.quarter_index + 1;

    // 1. Decision clamping.
    let rate_change = clamp_field(
        "rate_change",
        decisions.rate_change,
        config.rate_change_min,
        config.rate_change_max,
    );
    let cost_adjustment = decisions
        .cost_adjustment
        .map(|points| {
            clamp_field(
                "cost_adjustment",
                points,
                config.cost_adjustment_min,
                config.cost_adjustment_max,
            )
        })
        .unwrap_or(0.0);
    let shock = scenario
        .shock
        .as_ref()
        .map(|s| s.adjustments)
        .unwrap_or_default();

    // 2. Rate update.
    let interest_rate =
        (prior.interest_rate + rate_change + scenario.rate_drift + shock.rate_drift).max(0.0);

    // 3. Volume growth, percent per quarter, applied multiplicatively.
    let expansion_bonus = match decisions.expansion {
        Expansion::Yes => config.expansion_growth_bonus,
        Expansion::No => 0.0,
    };
    let risk_growth = match decisions.risk_tolerance {
        RiskTolerance::Loosen => config.risk_growth_delta,
        RiskTolerance::Tighten => -config.risk_growth_delta,
        RiskTolerance::Maintain => 0.0,
    };
    let loan_growth = scenario.gdp_growth * config.loan_demand_factor
        + expansion_bonus
        + risk_growth
        + rate_change * config.loan_rate_sensitivity
        + shock.loan_growth;
    let deposit_growth = scenario.gdp_growth * config.deposit_flow_factor
        + expansion_bonus
        + rate_change * config.deposit_rate_sensitivity
        + shock.deposit_growth;
    let loans = (prior.loans * (1.0 + loan_growth / 100.0)).max(0.0);
    let deposits = (prior.deposits * (1.0 + deposit_growth / 100.0)).max(0.0);

    // 4. Business-line effects. Books carried from prior quarters
    //    compound first; a newly chosen line is then seeded. A line
    //    already active is ignored.
    let mut lines = prior.lines.clone();
    if lines.aum > 0.0 {
        lines.aum *= 1.0 + config.aum_growth_rate / 100.0;
    }
    if lines.mb_assets > 0.0 {
        lines.mb_assets *= 1.0 + config.mb_asset_growth_rate / 100.0;
    }
    let mut ria_fee_income = prior.ria_fee_income;
    let mut line_cost_bump = 0.0;
    if let Some(line) = decisions.new_line {
        if !lines.has(line) {
            let effects = config.line_effects(line);
            ria_fee_income += effects.fee_income_increment;
            line_cost_bump = effects.cost_ratio_increment;
            if effects.recurring_revenue > 0.0 {
                lines.ib_revenue = effects.recurring_revenue;
            }
            if effects.seeds_aum > 0.0 {
                lines.aum = effects.seeds_aum;
            }
            if effects.seeds_mb_assets > 0.0 {
                lines.mb_assets = effects.seeds_mb_assets;
            }
            lines.active.push(line);
        }
    }

    // 5. Carried-ratio drift.
    let risk_provision = match decisions.risk_tolerance {
        RiskTolerance::Loosen => config.risk_provision_delta,
        RiskTolerance::Tighten => -config.risk_provision_delta,
        RiskTolerance::Maintain => 0.0,
    };
    let provision_ratio = (prior.provision_ratio
        + risk_provision
        + scenario.risk_environment.provision_pressure()
        + shock.provision_ratio)
        .max(0.0);
    let expansion_bump = match decisions.expansion {
        Expansion::Yes => config.expansion_cost_bump,
        Expansion::No => 0.0,
    };
    let operating_cost_ratio = (prior.operating_cost_ratio
        + cost_adjustment
        + scenario.inflation * config.cost_inflation_factor
        + expansion_bump
        + line_cost_bump
        + shock.cost_ratio)
        .clamp(config.cost_ratio_min, config.cost_ratio_max);

    // 6. Income statement, scaled to the quarter.
    let interest_income = loans * interest_rate / 100.0 * config.quarter_fraction;
    let deposit_rate = (interest_rate - config.funding_spread).max(0.0);
    let interest_expense = deposits * deposit_rate / 100.0 * config.quarter_fraction;
    let net_interest_income = interest_income - interest_expense;
    let revenue = net_interest_income + ria_fee_income + lines.ib_revenue;
    let provisions = provision_ratio / 100.0 * loans * config.quarter_fraction;
    let expenses = operating_cost_ratio / 100.0 * revenue;
    let net_income = revenue - expenses - provisions;

    // 7. Capital rollforward.
    let capital = (prior.capital + net_income * config.retention_fraction).max(0.0);

    // 8. Ratios — always from the current figures.
    let tier1 = tier1_ratio(capital, loans, config.risk_weight_factor);
    let roe = return_on_equity(net_income, capital);

    log::debug!(
        "{}: loans {:.2} ({:+.2}%), deposits {:.2} ({:+.2}%), rate {:.2}%, NI {:.2}, tier1 {:.2}%, roe {:.2}%",
        quarter_label(quarter_index),
        loans,
        loan_growth,
        deposits,
        deposit_growth,
        interest_rate,
        net_income,
        tier1,
        roe
    );

    Ok(FinancialState {
        quarter_index,
        year: year_of(quarter_index),
        quarter_label: quarter_label(quarter_index),
        capital,
        loans,
        deposits,
        assets: loans + lines.mb_assets,
        liabilities: deposits,
        interest_rate,
        operating_cost_ratio,
        provision_ratio,
        ria_fee_income,
        net_interest_income,
        revenue,
        expenses,
        provisions,
        net_income,
        lines,
        tier1,
        roe,
        feedback: String::new(),
    })
}

/// Tier-1 capital ratio, percent: capital over risk-weighted loans.
/// 0 when the risk-weighted book is empty — never infinite.
pub fn tier1_ratio(capital: f64, loans: f64, risk_weight_factor: f64) -> f64 {
    let risk_weighted_assets = loans * risk_weight_factor;
    if risk_weighted_assets <= 0.0 {
        0.0
    } else {
        capital / risk_weighted_assets * 100.0
    }
}

/// Return on equity, percent. 0 when capital is exhausted — a wiped-out
/// bank reports no return rather than a division artifact.
pub fn return_on_equity(net_income: f64, capital: f64) -> f64 {
    if capital <= 0.0 {
        0.0
    } else {
        net_income / capital * 100.0
    }
}

fn clamp_field(name: &str, value: f64, min: f64, max: f64) -> f64 {
    if value < min || value > max {
        log::warn!("{name} {value} outside [{min}, {max}] — clamped");
    }
    value.clamp(min, max)
}

fn validate_history(history: &[FinancialState]) -> EngineResult<&FinancialState> {
    let mut prior = history.first().ok_or(EngineError::EmptyHistory)?;
    for (position, state) in history.iter().enumerate().skip(1) {
        let expected = prior.quarter_index + 1;
        if state.quarter_index != expected {
            return Err(EngineError::NonMonotonicHistory {
                position,
                expected,
                actual: state.quarter_index,
            });
        }
        prior = state;
    }
    Ok(prior)
}
