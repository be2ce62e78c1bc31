//! Terminal play: players, the turn loop and session setup.
//!
//! The engine in [`crate::games::tictactoe`] never touches stdin or stdout.
//! Everything user-facing goes through a [`Console`], which pairs an
//! [`InputProvider`] with an [`OutputSink`].

mod input;
mod orchestrator;
mod output;
mod players;
mod setup;

pub use input::{InputProvider, ReaderInput, ScriptedInput, StdinInput};
pub use orchestrator::{Outcome, Seat, TurnController, TurnState};
pub use output::{GameEvent, MoveRejection, OutputSink, RecordingOutput, TerminalOutput};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use setup::{
    GameMode, PlayerKind, PlayerProfile, SessionSetup, SetupError, SetupPrompt, run_setup,
};

use anyhow::Result;

/// Input and output collaborators for one session.
pub struct Console {
    input: Box<dyn InputProvider>,
    output: Box<dyn OutputSink>,
}

impl Console {
    /// Pairs an input source with an output sink.
    pub fn new(input: impl InputProvider + 'static, output: impl OutputSink + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Stdin and stdout, colored when `color` is set.
    pub fn terminal(color: bool) -> Self {
        Self::new(StdinInput::stdin(), TerminalOutput::new(color))
    }

    /// Reads the next line of input.
    ///
    /// # Errors
    ///
    /// Fails when the input is exhausted, since no move or answer can follow.
    pub async fn read_line(&mut self) -> Result<String> {
        match self.input.read_line().await? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Input closed"),
        }
    }

    /// Sends an event to the output sink.
    pub fn emit(&mut self, event: GameEvent) {
        self.output.emit(event);
    }
}
