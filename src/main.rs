//! Bulls and cows - Entry Point

use bulls_cows::clock::SystemClock;
use bulls_cows::game::{new_rng, run_game};
use bulls_cows::model::error::AppError;
use bulls_cows::source::StdinSource;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Bulls and cows - guess the secret 4-digit number
#[derive(Parser, Debug)]
#[command(name = "bulls-cows")]
#[command(version)]
#[command(about = "Bulls and cows number-guessing game for the terminal")]
pub struct Args {
    /// Fixed seed for secret generation (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let (config, rejected) = {
        let config_file = bulls_cows::config::load_config_with_precedence(args.config.clone())?;
        let merged = bulls_cows::config::merge_config(config_file);
        let (with_env, rejected) = bulls_cows::config::apply_env_overrides(merged);
        let resolved =
            bulls_cows::config::apply_cli_overrides(with_env, args.seed, args.log_file.clone());
        (resolved, rejected)
    };

    bulls_cows::logging::init(&config.log_file_path)?;

    for rejection in &rejected {
        rejection.warn();
    }

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut rng = new_rng(config.seed);
    let mut input = StdinSource::new();
    let mut output = std::io::stdout().lock();

    run_game(&mut input, &mut output, &mut rng, &SystemClock)?;

    Ok(())
}
