//! Peer benchmark tests: reproducibility, bounded movement, and
//! independence from the player's own game.

use ironbank_core::{
    competitors::{self, NOISE_BOUND, SEASONAL_AMPLITUDE},
    decision::{Decision, Expansion, RiskTolerance},
    rng::{RngStream, RngStreams},
    session::GameSession,
};

#[test]
fn same_seed_and_quarter_reproduce_the_same_table() {
    let streams = RngStreams::new(7);

    let mut rng_a = streams.stream_for_quarter(RngStream::Competitor, 5);
    let mut rng_b = streams.stream_for_quarter(RngStream::Competitor, 5);

    assert_eq!(
        competitors::benchmarks(5, &mut rng_a),
        competitors::benchmarks(5, &mut rng_b)
    );
}

#[test]
fn roster_is_fixed_and_ordered() {
    let streams = RngStreams::new(11);
    let mut rng = streams.stream_for_quarter(RngStream::Competitor, 0);

    let table = competitors::benchmarks(0, &mut rng);
    let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Summit Federal", "Coastal Bankcorp", "Ironclad Trust"]
    );
}

#[test]
fn figures_stay_within_the_seasonal_and_noise_envelope() {
    let streams = RngStreams::new(3);
    let envelope = SEASONAL_AMPLITUDE + NOISE_BOUND + 0.05; // display rounding slack
    let bases = [(6.0, 11.5), (8.2, 10.8), (10.4, 12.7)];

    for quarter in 0..40 {
        let mut rng = streams.stream_for_quarter(RngStream::Competitor, quarter);
        let table = competitors::benchmarks(quarter, &mut rng);
        for (peer, (roe_base, tier1_base)) in table.iter().zip(bases.iter()) {
            assert!(
                (peer.roe - roe_base).abs() <= envelope,
                "{} ROE {} strayed from base {} at quarter {}",
                peer.name,
                peer.roe,
                roe_base,
                quarter
            );
            assert!(
                (peer.tier1 - tier1_base).abs() <= envelope,
                "{} Tier-1 {} strayed from base {} at quarter {}",
                peer.name,
                peer.tier1,
                tier1_base,
                quarter
            );
        }
    }
}

#[test]
fn peer_table_is_independent_of_the_players_game() {
    let mut cautious = GameSession::scripted(21);
    let mut aggressive = GameSession::scripted(21);

    let aggressive_decisions = Decision {
        expansion: Expansion::Yes,
        risk_tolerance: RiskTolerance::Loosen,
        rate_change: 1.0,
        ..Decision::hold()
    };
    for _ in 0..8 {
        cautious.advance(&Decision::hold()).expect("advance");
        aggressive.advance(&aggressive_decisions).expect("advance");
    }

    // Two very different games, the same peer table.
    assert_ne!(cautious.latest(), aggressive.latest());
    assert_eq!(cautious.benchmarks_for(8), aggressive.benchmarks_for(8));
}
