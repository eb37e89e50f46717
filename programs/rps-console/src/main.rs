//! Rock Paper Scissors Arena - console program
//!
//! Asks for a name, an opponent and a match type, then plays one match
//! against the chosen computer strategy.

mod console;
mod menu;

use anyhow::Context;
use clap::Parser;
use rps_logic::{Interactive, Match, MatchConfig, MatchReport, MatchType, Player, SeededRng};

use crate::console::{ConsoleReporter, Terminal};
use crate::menu::{choose_match_type, choose_name, choose_opponent, OPPONENTS};

#[derive(Debug, Parser)]
#[command(name = "rps", version, about = "Play Rock Paper Scissors against a scripted computer opponent")]
struct Args {
    /// Seed for computer moves; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log match internals to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Watch opponent N (1-4) play the chosen opponent instead of playing yourself
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=4))]
    simulate: Option<u8>,

    /// Round cap for simulations
    #[arg(long, default_value_t = 100)]
    rounds: u32,

    /// Print the final match report as JSON
    #[arg(long)]
    json: bool,
}

/// Terminal logger on stderr; warnings only unless verbose.
fn log(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

/// Computer-only matches always get a round cap; two strategies can tie forever.
fn match_config(kind: MatchType, simulating: bool, rounds: u32) -> MatchConfig {
    let config = MatchConfig::from(kind);
    if simulating {
        config.with_round_limit(rounds)
    } else {
        config
    }
}

fn play(args: &Args, seed: u64) -> anyhow::Result<MatchReport> {
    let mut terminal = Terminal::new();
    let mut reporter = ConsoleReporter;

    let human = match args.simulate {
        Some(_) => None,
        None => Some(choose_name(&mut terminal)?),
    };
    let opponent = choose_opponent(&mut terminal)?;
    let kind = choose_match_type(&mut terminal)?;

    let first = match human {
        Some(name) => Player::new(name, Interactive::new(&mut terminal)),
        None => Player::computer(OPPONENTS[usize::from(args.simulate.unwrap_or(1)) - 1]),
    };

    let config = match_config(kind, args.simulate.is_some(), args.rounds);
    let game = Match::new(first, Player::computer(opponent), config, SeededRng::new(seed));
    Ok(game.play(&mut reporter)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed {}", seed);

    let report = play(&args, seed).context("match aborted")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
