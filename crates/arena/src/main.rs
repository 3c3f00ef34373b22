//! Match CLI
//!
//! Play a headless match between two engine specs and optionally save the
//! result as JSON.

use std::env;

use arena::{MatchConfig, MatchRecord, MatchRunner};
use draughts_core::{Color, Engine};
use minimax_engine::{is_monte_carlo, MinimaxSearcher, PROFILES};
use montecarlo_engine::MonteCarloSearcher;

const DEFAULT_DEPTH: u8 = 4;
const DEFAULT_SIMULATIONS: u32 = 300;

fn print_usage() {
    println!("Draughts match runner");
    println!();
    println!("Usage:");
    println!("  arena match <engine1> <engine2> [--games N] [--out FILE]");
    println!();
    println!("Engine specs:");
    println!("  <Profile>[:depth]    minimax profile (default depth {})", DEFAULT_DEPTH);
    println!(
        "  MonteCarlo[:sims]    Monte-Carlo searcher (default {} simulations)",
        DEFAULT_SIMULATIONS
    );
    println!();
    println!("Profiles: {}", PROFILES.join(", "));
    println!();
    println!("Examples:");
    println!("  arena match Expert:4 Defensive:4 --games 20");
    println!("  arena match Aggressive:3 MonteCarlo:300 --games 10");
}

/// Build an engine factory from a spec like `Expert:4` or `MonteCarlo:300`.
/// Unknown profile names fall through to the minimax Expert fallback.
fn engine_factory(spec: &str) -> impl Fn(Color) -> Box<dyn Engine> + '_ {
    move |color| {
        let (name, param) = match spec.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (spec, None),
        };

        if is_monte_carlo(name) {
            let simulations = param
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SIMULATIONS);
            Box::new(MonteCarloSearcher::new(color, simulations))
        } else {
            let depth = param.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_DEPTH);
            Box::new(MinimaxSearcher::new(color, depth, name))
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let spec1 = &args[0];
    let spec2 = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut out: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", spec1, spec2);
    println!("Games: {}", num_games);
    println!();

    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine_factory(spec1), engine_factory(spec2));

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        spec1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out {
        let record = MatchRecord {
            engine1: spec1.clone(),
            engine2: spec2.clone(),
            result,
        };
        match record.save(&path) {
            Ok(()) => println!("Saved results to {}", path),
            Err(e) => eprintln!("Warning: failed to save results: {}", e),
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
