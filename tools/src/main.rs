//! game-runner: headless runner for the National Iron Bank game.
//!
//! Usage:
//!   game-runner --seed 12345 --quarters 40 --policy growth
//!   game-runner --seed 12345 --scripted --save run.json

use anyhow::Result;
use ironbank_core::{
    decision::{BusinessLine, Decision, Expansion, RiskTolerance},
    scenario::ScenarioSource,
    session::GameSession,
    state::FinancialState,
    types::{QuarterIndex, SessionId, GAME_HORIZON},
};
use std::env;

#[derive(Clone, Copy, PartialEq)]
enum Policy {
    /// Neutral decisions every quarter.
    Hold,
    /// Expand while capital allows, loosen risk, launch every line.
    Growth,
    /// Tighten risk, defend margins with rate and cost moves.
    Defensive,
}

impl Policy {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "hold" => Some(Self::Hold),
            "growth" => Some(Self::Growth),
            "defensive" => Some(Self::Defensive),
            _ => None,
        }
    }

    /// The decision this policy submits for the given quarter. Purely a
    /// function of the quarter index and the latest state, so runs are
    /// reproducible.
    fn decide(&self, next_index: QuarterIndex, latest: &FinancialState) -> Decision {
        match self {
            Self::Hold => Decision::hold(),
            Self::Growth => Decision {
                rate_change: 0.0,
                expansion: if latest.tier1 > 10.0 {
                    Expansion::Yes
                } else {
                    Expansion::No
                },
                risk_tolerance: RiskTolerance::Loosen,
                new_line: match next_index {
                    2 => Some(BusinessLine::WealthManagement),
                    6 => Some(BusinessLine::InvestmentBanking),
                    10 => Some(BusinessLine::MerchantBanking),
                    14 => Some(BusinessLine::Insurance),
                    _ => None,
                },
                cost_adjustment: None,
            },
            Self::Defensive => Decision {
                rate_change: if latest.roe < 4.0 { 0.25 } else { 0.0 },
                expansion: Expansion::No,
                risk_tolerance: RiskTolerance::Tighten,
                new_line: None,
                cost_adjustment: if latest.operating_cost_ratio > 65.0 {
                    Some(-1.0)
                } else {
                    None
                },
            },
        }
    }
}

#[derive(serde::Serialize)]
struct SessionDump<'a> {
    session_id: &'a SessionId,
    bank_name: &'a str,
    seed: u64,
    saved_at: chrono::DateTime<chrono::Utc>,
    history: &'a [FinancialState],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let quarters = parse_arg(&args, "--quarters", GAME_HORIZON);
    let scripted = args.iter().any(|a| a == "--scripted");
    let policy_name = args
        .windows(2)
        .find(|w| w[0] == "--policy")
        .map(|w| w[1].as_str())
        .unwrap_or("hold");
    let policy = Policy::parse(policy_name)
        .ok_or_else(|| anyhow::anyhow!("unknown policy '{policy_name}' (hold|growth|defensive)"))?;
    let save = args
        .windows(2)
        .find(|w| w[0] == "--save")
        .map(|w| w[1].to_string());

    println!("National Iron Bank — game-runner");
    println!("  seed:     {seed}");
    println!("  quarters: {quarters}");
    println!("  policy:   {policy_name}");
    println!(
        "  economy:  {}",
        if scripted { "scripted" } else { "randomized" }
    );
    println!();

    if scripted {
        let mut session = GameSession::scripted(seed);
        play(&mut session, quarters, policy, save.as_deref())
    } else {
        let mut session = GameSession::seeded(seed);
        play(&mut session, quarters, policy, save.as_deref())
    }
}

fn play<S: ScenarioSource>(
    session: &mut GameSession<S>,
    quarters: QuarterIndex,
    policy: Policy,
    save: Option<&str>,
) -> Result<()> {
    for _ in 0..quarters {
        if session.is_complete() {
            break;
        }
        let next_index = session.latest().quarter_index + 1;
        let decisions = policy.decide(next_index, session.latest());
        let state = session.advance(&decisions)?;
        if state.net_income < 0.0 {
            log::warn!("{} closed at a loss of {:.2}", state.quarter_label, state.net_income);
        }
        println!(
            "  {} | NI: {:>6.2} | ROE: {:>5.1}% | Tier-1: {:>5.1}% | Loans: {:>6.1} | OCR: {:.1}%",
            state.quarter_label,
            state.net_income,
            state.roe,
            state.tier1,
            state.loans,
            state.operating_cost_ratio
        );
    }

    print_summary(session)?;

    if let Some(path) = save {
        let dump = SessionDump {
            session_id: &session.session_id,
            bank_name: &session.bank_name,
            seed: session.master_seed(),
            saved_at: chrono::Utc::now(),
            history: session.history(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&dump)?)?;
        println!();
        println!("Session saved to {path}");
    }

    Ok(())
}

fn print_summary<S: ScenarioSource>(session: &GameSession<S>) -> Result<()> {
    let latest = session.latest();
    let scorecard = session.scorecard()?;

    println!();
    println!("=== RUN SUMMARY ===");
    println!("  session:       {}", session.session_id);
    println!("  quarters:      {}", session.quarters_played());
    println!("  final quarter: {}", latest.quarter_label);
    println!("  capital:       {:.1}", latest.capital);
    println!("  loans:         {:.1}", latest.loans);
    println!("  deposits:      {:.1}", latest.deposits);

    println!();
    println!("=== SCORECARD ===");
    println!("  avg ROE:        {:.1}%", scorecard.average_roe);
    println!("  avg Tier-1:     {:.1}%", scorecard.average_tier1);
    println!("  cumulative NI:  {:.1}", scorecard.cumulative_net_income);
    println!("  overall health: {}", scorecard.health.as_str());

    println!();
    println!("=== PEER BENCHMARKS ({}) ===", latest.quarter_label);
    for peer in session.benchmarks() {
        println!(
            "  {:<18} ROE {:>5.1}% | Tier-1 {:>5.1}%",
            peer.name, peer.roe, peer.tier1
        );
    }

    if !latest.feedback.is_empty() {
        println!();
        println!("=== BOARDROOM ===");
        println!("  {}", latest.feedback);
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
