//! Boardroom feedback — threshold classification of a quarter transition.
//!
//! RULES:
//!   - Rules run in a fixed order and every applicable reason is
//!     collected; same inputs, same reasons, every time.
//!   - Reasons are structured data. Prose exists only in render(), at
//!     the presentation boundary, so tests never match on strings.

use crate::decision::{BusinessLine, Decision, Expansion};
use crate::scenario::Scenario;
use crate::state::FinancialState;
use serde::{Deserialize, Serialize};

/// ROE must move more than this many points to draw a comment.
pub const ROE_DELTA_THRESHOLD: f64 = 1.0;
/// Tier-1 below this is regulatory-intervention territory.
pub const TIER1_CRITICAL: f64 = 8.0;
/// Tier-1 below this trails the peer average.
pub const TIER1_PEER_AVERAGE: f64 = 10.0;
/// Quarter-over-quarter loan growth above this draws an underwriting
/// caution.
pub const LOAN_GROWTH_CAUTION_PCT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FeedbackReason {
    RoeImproved { delta: f64 },
    RoeSlipped { delta: f64 },
    Tier1Critical { tier1: f64 },
    Tier1BelowPeers { tier1: f64 },
    Tier1Healthy { tier1: f64 },
    LoanGrowthCaution { growth_pct: f64 },
    LineActivated { line: BusinessLine },
    MerchantBookGrew { mb_assets: f64 },
    ExpansionPursued,
    CostRatioRose { from: f64, to: f64 },
    ShockImpact { narrative: String },
}

/// Classify a quarter transition. Evaluation order is part of the
/// contract — the rendered narrative reads in this sequence.
pub fn assess(
    new: &FinancialState,
    prior: &FinancialState,
    decisions: &Decision,
    scenario: &Scenario,
) -> Vec<FeedbackReason> {
    let mut reasons = Vec::new();

    // 1. Profitability against last quarter.
    let roe_delta = new.roe - prior.roe;
    if roe_delta > ROE_DELTA_THRESHOLD {
        reasons.push(FeedbackReason::RoeImproved { delta: roe_delta });
    } else if roe_delta < -ROE_DELTA_THRESHOLD {
        reasons.push(FeedbackReason::RoeSlipped { delta: roe_delta });
    }

    // 2. Capital adequacy — exactly one line, always.
    if new.tier1 < TIER1_CRITICAL {
        reasons.push(FeedbackReason::Tier1Critical { tier1: new.tier1 });
    } else if new.tier1 < TIER1_PEER_AVERAGE {
        reasons.push(FeedbackReason::Tier1BelowPeers { tier1: new.tier1 });
    } else {
        reasons.push(FeedbackReason::Tier1Healthy { tier1: new.tier1 });
    }

    // 3. Growth discipline.
    let loan_growth_pct = if prior.loans > 0.0 {
        (new.loans / prior.loans - 1.0) * 100.0
    } else {
        0.0
    };
    if loan_growth_pct > LOAN_GROWTH_CAUTION_PCT {
        reasons.push(FeedbackReason::LoanGrowthCaution {
            growth_pct: loan_growth_pct,
        });
    }

    // 4. New business lines: first quarter a line goes absent → present.
    for line in &new.lines.active {
        if !prior.lines.has(*line) {
            reasons.push(FeedbackReason::LineActivated { line: *line });
        }
    }
    if new.lines.mb_assets > prior.lines.mb_assets && prior.lines.mb_assets > 0.0 {
        reasons.push(FeedbackReason::MerchantBookGrew {
            mb_assets: new.lines.mb_assets,
        });
    }

    // 5. Strategy and cost discipline.
    if decisions.expansion == Expansion::Yes {
        reasons.push(FeedbackReason::ExpansionPursued);
    }
    if new.operating_cost_ratio > prior.operating_cost_ratio {
        reasons.push(FeedbackReason::CostRatioRose {
            from: prior.operating_cost_ratio,
            to: new.operating_cost_ratio,
        });
    }

    // 6. Scenario shock, carried verbatim.
    if let Some(shock) = &scenario.shock {
        reasons.push(FeedbackReason::ShockImpact {
            narrative: shock.narrative_impact.clone(),
        });
    }

    reasons
}

/// Render reasons to boardroom prose. One sentence per reason, joined
/// with spaces, in assessment order.
pub fn render(reasons: &[FeedbackReason]) -> String {
    reasons
        .iter()
        .map(render_one)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_one(reason: &FeedbackReason) -> String {
    match reason {
        FeedbackReason::RoeImproved { delta } => format!(
            "ROE has improved {delta:+.1} points — shareholders will be pleased."
        ),
        FeedbackReason::RoeSlipped { delta } => format!(
            "ROE has slipped {delta:+.1} points — the board is concerned about earnings sustainability."
        ),
        FeedbackReason::Tier1Critical { tier1 } => format!(
            "Tier 1 capital is critically low at {tier1:.1}% — regulators may intervene."
        ),
        FeedbackReason::Tier1BelowPeers { tier1 } => format!(
            "Tier 1 capital of {tier1:.1}% is below peer average — the board recommends strengthening capital."
        ),
        FeedbackReason::Tier1Healthy { tier1 } => format!(
            "Tier 1 capital remains healthy at {tier1:.1}%, above peer average."
        ),
        FeedbackReason::LoanGrowthCaution { growth_pct } => format!(
            "Loan growth of {growth_pct:.1}% is accelerating — ensure underwriting discipline is maintained."
        ),
        FeedbackReason::LineActivated { line } => format!(
            "The {} line is now contributing — the board encourages deeper talent build-out.",
            line.label()
        ),
        FeedbackReason::MerchantBookGrew { mb_assets } => format!(
            "Merchant banking activity has expanded to {mb_assets:.1} — risk teams should monitor exposures."
        ),
        FeedbackReason::ExpansionPursued => {
            "Operational expansion is underway, increasing the cost base.".to_string()
        }
        FeedbackReason::CostRatioRose { from, to } => format!(
            "The operating cost ratio rose from {from:.1}% to {to:.1}% — the board urges a review of staffing and expenses."
        ),
        FeedbackReason::ShockImpact { narrative } => narrative.clone(),
    }
}
