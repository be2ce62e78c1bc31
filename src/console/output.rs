//! Events the game reports and the sinks that display them.

use super::setup::{SetupError, SetupPrompt};
use crate::games::tictactoe::{Board, CoordinatesFormatError, Marker, Move, PlaceError};
use crossterm::style::{StyledContent, Stylize};
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Why a typed move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveRejection {
    /// The line was not an `x,y` pair.
    Format(CoordinatesFormatError),
    /// The board refused the placement.
    Placement(PlaceError),
}

/// Something the player should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board to show before a turn and once the game ends.
    BoardChanged(Board),
    /// A human is being asked for coordinates.
    AwaitingMove {
        /// Player name.
        name: String,
        /// Player marker.
        marker: Marker,
    },
    /// A human's input was refused; they will be asked again.
    MoveRejected(MoveRejection),
    /// The computer is about to move.
    ComputerThinking {
        /// Player name.
        name: String,
    },
    /// A move was applied.
    MoveMade {
        /// Player name.
        name: String,
        /// The move.
        action: Move,
    },
    /// The game ended. `None` means a draw.
    GameOver {
        /// Name of the winner.
        winner: Option<String>,
    },
    /// A setup question.
    Setup(SetupPrompt),
    /// A setup answer was refused; the same question follows.
    SetupRejected(SetupError),
}

/// Receives game events for display.
pub trait OutputSink: Send {
    /// Shows one event.
    fn emit(&mut self, event: GameEvent);
}

/// Writes events to stdout, colored unless turned off.
#[derive(Debug, Clone, Copy)]
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    /// Creates a terminal sink. With `color` off no escape sequences are written.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: String, style: impl FnOnce(String) -> StyledContent<String>) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputSink for TerminalOutput {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::BoardChanged(board) => {
                println!();
                print!("{}", board.render());
                println!();
            }
            GameEvent::AwaitingMove { name, marker } => {
                let prompt = format!("{name}({marker}), enter your coordinates in the form x,y: ");
                print!("{}", self.paint(prompt, Stylize::blue));
            }
            GameEvent::MoveRejected(rejection) => {
                println!("{}", self.paint(rejection.to_string(), Stylize::yellow));
            }
            GameEvent::ComputerThinking { name } => {
                let notice = format!("{name} will now perform its move!");
                println!("{}", self.paint(notice, |t| t.cyan().on_magenta()));
            }
            GameEvent::MoveMade { name, action } => {
                println!("{}", self.paint(format!("{name} played {action}"), Stylize::dark_grey));
            }
            GameEvent::GameOver { winner: Some(name) } => {
                let message = format!("Congratulations {name}, you win!");
                println!("{}", self.paint(message, |t| t.green().bold()));
            }
            GameEvent::GameOver { winner: None } => {
                println!("{}", self.paint("Bummer, you've drawn...".into(), Stylize::yellow));
            }
            GameEvent::Setup(prompt) => {
                print!("{}", self.paint(prompt.to_string(), Stylize::blue));
            }
            GameEvent::SetupRejected(error) => {
                println!("{}", self.paint(error.to_string(), Stylize::yellow));
            }
        }
        let _ = std::io::stdout().flush();
    }
}

/// Collects events in memory; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl RecordingOutput {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputSink for RecordingOutput {
    fn emit(&mut self, event: GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
