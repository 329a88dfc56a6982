//! Scorecard aggregation and health classification.

use ironbank_core::{
    config::EngineConfig,
    error::EngineError,
    scorecard::{self, HealthLabel},
    state::FinancialState,
};

/// Build a history with the given per-quarter (roe, tier1, net_income).
fn history_of(rows: &[(f64, f64, f64)]) -> Vec<FinancialState> {
    let config = EngineConfig::default();
    rows.iter()
        .enumerate()
        .map(|(index, (roe, tier1, net_income))| {
            let mut state = FinancialState::seed(&config);
            state.quarter_index = index as u32;
            state.roe = *roe;
            state.tier1 = *tier1;
            state.net_income = *net_income;
            state
        })
        .collect()
}

#[test]
fn averages_are_arithmetic_means_over_the_full_history() {
    let history = history_of(&[
        (5.0, 10.0, 1.0),
        (6.0, 10.0, 1.5),
        (7.0, 10.0, 2.0),
        (8.0, 10.0, 2.5),
    ]);

    let card = scorecard::summarize(&history).expect("scorecard");

    assert_eq!(card.average_roe, 6.5);
    assert_eq!(card.average_tier1, 10.0);
    assert_eq!(card.cumulative_net_income, 7.0);
    assert_eq!(card.health, HealthLabel::Stable);
}

#[test]
fn weak_wins_when_thresholds_overlap() {
    // Strong ROE but weak capital: Weak is checked first.
    let history = history_of(&[(12.0, 7.0, 1.0), (12.0, 7.0, 1.0)]);
    let card = scorecard::summarize(&history).expect("scorecard");
    assert_eq!(card.health, HealthLabel::Weak);
}

#[test]
fn strong_requires_both_capital_and_returns() {
    let history = history_of(&[(11.0, 13.0, 2.0), (12.0, 13.0, 2.0)]);
    let card = scorecard::summarize(&history).expect("scorecard");
    assert_eq!(card.health, HealthLabel::Strong);

    // Capital alone is not enough.
    let history = history_of(&[(6.0, 13.0, 2.0), (6.0, 13.0, 2.0)]);
    let card = scorecard::summarize(&history).expect("scorecard");
    assert_eq!(card.health, HealthLabel::Stable);
}

#[test]
fn low_returns_alone_classify_as_weak() {
    let history = history_of(&[(3.0, 11.0, 0.5), (4.0, 11.0, 0.5)]);
    let card = scorecard::summarize(&history).expect("scorecard");
    assert_eq!(card.health, HealthLabel::Weak);
}

#[test]
fn empty_history_is_rejected() {
    let err = scorecard::summarize(&[]).expect_err("empty history");
    assert!(matches!(err, EngineError::EmptyHistory));
}
