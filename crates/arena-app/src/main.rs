//! arena: headless host for the arena simulation.
//!
//! Usage:
//!   arena --ticks 600 --every 60 --fast < commands.jsonl
//!   arena --seed 7 --tuning tuning.toml

use std::io::{self, BufWriter};
use std::process;

use log::{error, info};

use arena_app::cli::{self, CliArgs};
use arena_app::error::AppError;
use arena_app::game_loop::{self, LoopOptions};
use arena_app::input;
use arena_app::state::new_shared_snapshot;
use arena_core::config::ArenaTuning;
use arena_sim::SimConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        if matches!(e, AppError::Args(_)) {
            cli::print_usage();
        }
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;
    if cli.help {
        cli::print_usage();
        return Ok(());
    }

    let tuning = match &cli.tuning {
        Some(path) => {
            info!("Loading tuning from {}", path.display());
            ArenaTuning::load_from_file(path)?
        }
        None => ArenaTuning::default(),
    };
    let mut config = SimConfig {
        tuning,
        ..Default::default()
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!("Starting arena with seed {}", config.seed);

    let options = LoopOptions {
        max_ticks: cli.ticks,
        snapshot_every: cli.every,
        paced: !cli.fast,
    };
    let latest = new_shared_snapshot();
    let out = BufWriter::new(io::stdout());

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, options, out, latest.clone())?;
    // Bounded runs keep going after stdin closes, so hold a sender until the loop ends.
    input::spawn_stdin_reader(cmd_tx.clone(), cli.ticks.is_none())?;

    let ticks = handle
        .join()
        .map_err(|_| AppError::GameLoop("game loop thread panicked".into()))??;
    drop(cmd_tx);

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            info!(
                "Finished after {ticks} ticks: {:?} on wave {}",
                snapshot.phase, snapshot.wave
            );
        }
    }
    Ok(())
}
