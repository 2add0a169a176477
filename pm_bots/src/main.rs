//! Console simulator pitting Pokermon AI personalities against each other.

mod config;
mod simulation;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Error};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use pokermon::{PersonalityProfile, PersonalityTable};

use config::{Overrides, SimConfig};
use simulation::Simulation;

const HELP: &str = "\
Simulate AI poker hands between Pokermon personalities

USAGE:
  pm_bots [OPTIONS]

OPTIONS:
  --seed           N       Seed for a reproducible run     [default: env PM_SEED or random]
  --hands          N       Hands to play                   [default: env PM_HANDS or 100]
  --players        N       AI seats (2-10)                 [default: env PM_PLAYERS or 4]
  --buy-in         CHIPS   Starting stack per seat         [default: env PM_BUY_IN or 1000]
  --ante           CHIPS   Ante per hand                   [default: env PM_ANTE or 10]
  --personalities  FILE    JSON file of extra personalities dealt to the seats

FLAGS:
  --json                   Print the summary as JSON
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter (e.g., debug to see every decision)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        json: pargs.contains("--json"),
        seed: pargs.opt_value_from_str("--seed")?,
        hands: pargs.opt_value_from_str("--hands")?,
        players: pargs.opt_value_from_str("--players")?,
        buy_in: pargs.opt_value_from_str("--buy-in")?,
        ante: pargs.opt_value_from_str("--ante")?,
        personalities: pargs.opt_value_from_str("--personalities")?,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = SimConfig::from_env(overrides)?;
    let custom = load_personalities(&config)?;

    // Finish the current hand on Ctrl-C, then report.
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = stop.clone();
    set_handler(move || handler_stop.store(true, Ordering::SeqCst))?;

    info!(
        "Simulating {} hands with {} players (buy-in ${}, ante ${})",
        config.hands, config.players, config.buy_in, config.ante
    );

    let json = config.json;
    let mut sim = Simulation::new(config, &custom);
    let summary = sim.run(&stop);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }

    Ok(())
}

/// Extra personalities from the configured JSON file, in file order.
fn load_personalities(config: &SimConfig) -> Result<Vec<PersonalityProfile>, Error> {
    let Some(path) = &config.personalities else {
        return Ok(Vec::new());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut table = PersonalityTable::standard();
    let added = table
        .extend_from_json(&contents)
        .with_context(|| format!("Invalid personalities in {}", path.display()))?;

    Ok(table.iter().skip(table.len() - added).cloned().collect())
}
