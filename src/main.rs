//! Sketchbook - Unified CLI
//!
//! `play` runs a console tic-tac-toe game; `smooth` plots a moving average.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use sketchbook::{ConsoleSession, SessionOutcome, SmoothingConfig, show_chart};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play => run_play(),
        Command::Smooth {
            config,
            window,
            samples,
            seed,
            json,
        } => run_smooth(config, window, samples, seed, json),
    }
}

/// Logs go to stderr so stdout carries only the game or the JSON series.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the console game
#[instrument]
fn run_play() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());

    match session.play_game()? {
        SessionOutcome::Finished(result) => info!(%result, "Session finished"),
        SessionOutcome::Abandoned { moves } => info!(moves, "Session abandoned"),
    }
    Ok(())
}

/// Run the smoothing plot
#[instrument]
fn run_smooth(
    config: Option<PathBuf>,
    window: Option<usize>,
    samples: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut settings = match config {
        Some(path) => SmoothingConfig::from_file(path)?,
        None => SmoothingConfig::default(),
    };
    if let Some(window) = window {
        settings = settings.with_window(window);
    }
    if let Some(samples) = samples {
        settings = settings.with_samples(samples);
    }
    if seed.is_some() {
        settings = settings.with_seed(seed);
    }
    info!(?settings, "Generating series");

    let series = settings.generate()?;

    if json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &series)?;
        writeln!(stdout)?;
    } else {
        show_chart(&series)?;
    }
    Ok(())
}
