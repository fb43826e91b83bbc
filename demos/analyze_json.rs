//! Analyze a hand history stored as JSON and print the stats.
//!
//! ```text
//! cargo run --example analyze_json -- hand.json [config.json]
//! ```
//!
//! Pass `-` as the hand path to read from stdin. Logging honours `RUST_LOG`
//! and defaults to `info`; `RUST_LOG=hand_stats=trace` shows every action
//! as it is folded.
use std::io::Read;

use hand_stats::HandHistory;
use hand_stats::analysis::{AnalyzerConfig, HandAnalyzer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(hand_path) = args.next() else {
        eprintln!("usage: analyze_json <hand.json|-> [config.json]");
        std::process::exit(2);
    };

    let config = match args.next() {
        Some(path) => AnalyzerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => AnalyzerConfig::default(),
    };
    let hand = HandHistory::from_json(&read_input(&hand_path)?)?;
    info!(
        players = hand.players.len(),
        actions = hand.actions.len(),
        "Loaded hand history"
    );

    let stats = HandAnalyzer::new(config)?.analyze(&hand)?;
    println!("{}", stats.to_json_pretty()?);
    Ok(())
}
