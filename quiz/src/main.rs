//! Timed quiz runner.
//!
//! Reads `question,answer` rows from a CSV file, asks them one by one, and
//! reports the score when every question is answered or the time limit runs
//! out, whichever comes first.

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use quiz::core::order::OrderGenerator;
use quiz::exit_codes;
use quiz::io::config::{ConfigOverrides, InvalidConfig, apply_overrides, load_config};
use quiz::io::input::AnswerReader;
use quiz::io::problems::{LoadError, ParseError, load_problems};
use quiz::logging;
use quiz::session::run_session;

#[derive(Parser)]
#[command(name = "quiz", version, about = "Timed quiz over a CSV file of questions")]
struct Cli {
    /// CSV file in the format `question,answer` [default: problems.csv].
    #[arg(long = "csv", value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 30].
    #[arg(long = "timelimit", visible_alias = "time-limit", value_name = "SECS")]
    time_limit: Option<u64>,

    /// Present questions in random order.
    #[arg(long)]
    shuffle: bool,

    /// Optional TOML config file; flags override its values.
    #[arg(long, value_name = "PATH", default_value = "quiz.toml")]
    config: PathBuf,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            problems_path: self.csv.clone(),
            time_limit_secs: self.time_limit,
            shuffle: self.shuffle.then_some(true),
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let base = load_config(&cli.config).context("load config")?;
    let config = apply_overrides(base, &cli.overrides())?;
    debug!(?config, "configuration resolved");

    let store = load_problems(&config.problems_path)?;
    let order = OrderGenerator::from_clock().indices(store.len(), config.shuffle);

    let reader = AnswerReader::new(BufReader::new(io::stdin()));
    let mut stdout = io::stdout();
    run_session(&store, &order, config.time_limit(), &reader, &mut stdout)?;
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<LoadError>().is_some() {
        exit_codes::LOAD_FAILED
    } else if err.downcast_ref::<ParseError>().is_some() {
        exit_codes::PARSE_FAILED
    } else if err.downcast_ref::<InvalidConfig>().is_some() {
        exit_codes::INVALID_CONFIG
    } else {
        exit_codes::LOAD_FAILED
    }
}
