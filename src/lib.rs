//! Strictly Noughts - terminal tic-tac-toe
//!
//! A 3x3 board engine, a heuristic computer opponent and a turn loop that
//! pits any two players against each other.
//!
//! # Architecture
//!
//! - **Games**: the board, win/draw rules and the computer's move heuristic
//! - **Console**: players, the turn controller and interactive setup, talking
//!   to the user only through an input provider and an output sink
//! - **Config**: TOML configuration and command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use strictly_noughts::{
//!     ComputerPlayer, Console, Marker, RecordingOutput, ScriptedInput, TurnController,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let console = Console::new(ScriptedInput::default(), RecordingOutput::new());
//! let mut game = TurnController::new(
//!     Box::new(ComputerPlayer::new("Computer 1", Marker::X, Marker::O)),
//!     Box::new(ComputerPlayer::new("Computer 2", Marker::O, Marker::X)),
//!     console,
//! );
//! let outcome = game.run().await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod games;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console collaborators, players and turn loop
pub use console::{
    ComputerPlayer, Console, GameEvent, GameMode, HumanPlayer, InputProvider, MoveRejection,
    Outcome, OutputSink, Player, PlayerKind, PlayerProfile, ReaderInput, RecordingOutput,
    ScriptedInput, Seat, SessionSetup, SetupError, SetupPrompt, StdinInput, TerminalOutput,
    TurnController, TurnState, run_setup,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, Cells, Coordinates, CoordinatesFormatError, Marker, Move, PlaceError, Tier,
    plan_move, rules, select_move,
};
