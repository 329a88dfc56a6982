//! Feedback rule coverage: thresholds, fixed ordering, and verbatim
//! shock pass-through. Assertions work on the structured reasons, not
//! on rendered prose.

use ironbank_core::{
    config::EngineConfig,
    decision::{BusinessLine, Decision, Expansion},
    feedback::{self, FeedbackReason},
    scenario::{Scenario, Shock, ShockAdjustments},
    state::FinancialState,
};

fn quarter_pair() -> (FinancialState, FinancialState) {
    let config = EngineConfig::default();
    let prior = FinancialState::seed(&config);
    let mut new = prior.clone();
    new.quarter_index = 1;
    (prior, new)
}

#[test]
fn a_small_roe_move_draws_no_profitability_comment() {
    let (prior, mut new) = quarter_pair();
    new.roe = prior.roe + 0.5;

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());

    assert!(!reasons
        .iter()
        .any(|r| matches!(r, FeedbackReason::RoeImproved { .. } | FeedbackReason::RoeSlipped { .. })));
}

#[test]
fn roe_improvement_beyond_a_point_is_praised() {
    let (prior, mut new) = quarter_pair();
    new.roe = prior.roe + 2.0;

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());

    assert!(matches!(
        reasons.first(),
        Some(FeedbackReason::RoeImproved { .. })
    ));
}

#[test]
fn roe_decline_beyond_a_point_draws_concern() {
    let (prior, mut new) = quarter_pair();
    new.roe = prior.roe - 1.5;

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());

    assert!(matches!(
        reasons.first(),
        Some(FeedbackReason::RoeSlipped { .. })
    ));
}

#[test]
fn tier1_is_classified_into_exactly_one_band() {
    let (prior, mut new) = quarter_pair();

    for (tier1, expect_critical, expect_below, expect_healthy) in [
        (7.0, true, false, false),
        (9.0, false, true, false),
        (16.0, false, false, true),
    ] {
        new.tier1 = tier1;
        let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());

        let critical = reasons
            .iter()
            .any(|r| matches!(r, FeedbackReason::Tier1Critical { .. }));
        let below = reasons
            .iter()
            .any(|r| matches!(r, FeedbackReason::Tier1BelowPeers { .. }));
        let healthy = reasons
            .iter()
            .any(|r| matches!(r, FeedbackReason::Tier1Healthy { .. }));

        assert_eq!(critical, expect_critical, "tier1={tier1}");
        assert_eq!(below, expect_below, "tier1={tier1}");
        assert_eq!(healthy, expect_healthy, "tier1={tier1}");
    }
}

#[test]
fn fast_loan_growth_draws_an_underwriting_caution() {
    let (prior, mut new) = quarter_pair();
    new.loans = prior.loans * 1.05;

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());

    let caution = reasons.iter().find_map(|r| match r {
        FeedbackReason::LoanGrowthCaution { growth_pct } => Some(*growth_pct),
        _ => None,
    });
    let growth = caution.expect("5% growth should draw a caution");
    assert!((growth - 5.0).abs() < 1e-9);
}

#[test]
fn a_line_is_encouraged_only_in_its_activation_quarter() {
    let (prior, mut new) = quarter_pair();
    new.lines.active.push(BusinessLine::InvestmentBanking);

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &Scenario::neutral());
    assert!(reasons.iter().any(|r| matches!(
        r,
        FeedbackReason::LineActivated {
            line: BusinessLine::InvestmentBanking
        }
    )));

    // Next quarter the line is old news.
    let mut later = new.clone();
    later.quarter_index = 2;
    let reasons = feedback::assess(&later, &new, &Decision::hold(), &Scenario::neutral());
    assert!(!reasons
        .iter()
        .any(|r| matches!(r, FeedbackReason::LineActivated { .. })));
}

#[test]
fn expansion_is_noted() {
    let (prior, new) = quarter_pair();
    let decisions = Decision {
        expansion: Expansion::Yes,
        ..Decision::hold()
    };

    let reasons = feedback::assess(&new, &prior, &decisions, &Scenario::neutral());
    assert!(reasons
        .iter()
        .any(|r| matches!(r, FeedbackReason::ExpansionPursued)));
}

#[test]
fn shock_narrative_passes_through_verbatim_and_last() {
    let (prior, new) = quarter_pair();
    let scenario = Scenario {
        shock: Some(Shock {
            label: "Regulatory Crackdown".to_string(),
            narrative_impact: "Increased compliance costs affect profitability.".to_string(),
            adjustments: ShockAdjustments::default(),
        }),
        ..Scenario::neutral()
    };

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &scenario);

    assert_eq!(
        reasons.last(),
        Some(&FeedbackReason::ShockImpact {
            narrative: "Increased compliance costs affect profitability.".to_string()
        })
    );

    let rendered = feedback::render(&reasons);
    assert!(rendered.ends_with("Increased compliance costs affect profitability."));
}

#[test]
fn rule_order_is_fixed() {
    let (prior, mut new) = quarter_pair();
    new.roe = prior.roe + 2.0;
    new.tier1 = 7.0;
    new.loans = prior.loans * 1.06;
    let scenario = Scenario {
        shock: Some(Shock {
            label: "Deposit Flight".to_string(),
            narrative_impact: "Depositors move to money markets.".to_string(),
            adjustments: ShockAdjustments::default(),
        }),
        ..Scenario::neutral()
    };

    let reasons = feedback::assess(&new, &prior, &Decision::hold(), &scenario);

    assert!(matches!(reasons[0], FeedbackReason::RoeImproved { .. }));
    assert!(matches!(reasons[1], FeedbackReason::Tier1Critical { .. }));
    assert!(matches!(
        reasons[2],
        FeedbackReason::LoanGrowthCaution { .. }
    ));
    assert!(matches!(
        reasons.last(),
        Some(FeedbackReason::ShockImpact { .. })
    ));
}

#[test]
fn identical_inputs_produce_identical_feedback() {
    let (prior, mut new) = quarter_pair();
    new.roe = prior.roe + 3.0;
    let scenario = Scenario::neutral();

    let first = feedback::assess(&new, &prior, &Decision::hold(), &scenario);
    let second = feedback::assess(&new, &prior, &Decision::hold(), &scenario);

    assert_eq!(first, second);
    assert_eq!(feedback::render(&first), feedback::render(&second));
}
