//! Command-line interface for strictly_noughts.

use crate::config::GameConfig;
use clap::Parser;
use std::path::PathBuf;

/// Strictly Noughts - tic-tac-toe in the terminal
///
/// Game mode, names, markers and who moves first are asked interactively.
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "strictly_noughts.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer thinking pause in milliseconds
    #[arg(long)]
    pub think_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Applies flags on top of file configuration.
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.think_ms {
            config = config.with_think_delay_ms(ms);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        config
    }
}
