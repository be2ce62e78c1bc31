//! Strictly Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_noughts::{Cli, Console, GameConfig, TurnController, run_setup};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.apply(GameConfig::load_or_default(&cli.config)?);
    info!(?config, "Starting Strictly Noughts");

    let mut console = Console::terminal(*config.color());
    let setup = run_setup(&mut console, *config.max_setup_attempts()).await?;
    info!(mode = %setup.mode(), "Session configured");

    let [first, second] = setup.into_players(&config);
    let mut game = TurnController::new(first, second, console);
    let outcome = game.run().await?;

    info!(%outcome, "Game finished");
    Ok(())
}
