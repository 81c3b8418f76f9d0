//! Command-line interface for sketchbook.

use clap::{Parser, Subcommand};

/// Sketchbook - console tic-tac-toe and a terminal smoothing plot
#[derive(Parser, Debug)]
#[command(name = "sketchbook")]
#[command(about = "Console tic-tac-toe and a moving-average plot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Play two-player tic-tac-toe on this console
    Play,

    /// Plot noisy sine samples with a moving average and confidence band
    Smooth {
        /// Path to a TOML file with smoothing settings
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Moving-average window in samples (overrides config)
        #[arg(short, long)]
        window: Option<usize>,

        /// Number of samples (overrides config)
        #[arg(long)]
        samples: Option<usize>,

        /// RNG seed for reproducible data (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the series as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },
}
