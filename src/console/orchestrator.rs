//! Game orchestration between players.

use super::players::Player;
use super::{Console, GameEvent};
use crate::games::tictactoe::{Board, Marker, Move};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// One of the two places at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player who opens the game.
    First,
    /// The player who answers.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Where the turn loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting on the player in this seat.
    AwaitingMove(Seat),
    /// The player in this seat completed a line.
    Won(Seat),
    /// The board filled up without a line.
    Drawn,
}

impl TurnState {
    /// Whether the loop has stopped.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// Winner's name.
        name: String,
        /// Winner's marker.
        marker: Marker,
    },
    /// Board full, no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { name, marker } => write!(f, "{name} ({marker}) wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Runs turns between two players on a board it owns.
pub struct TurnController {
    board: Board,
    players: [Box<dyn Player>; 2],
    state: TurnState,
    history: Vec<Move>,
    console: Console,
}

impl TurnController {
    /// Starts a game on an empty board; `first` moves first.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, console: Console) -> Self {
        Self::with_board(Board::new(), first, second, console)
    }

    /// Starts from an existing board, with `first` to move.
    pub fn with_board(
        board: Board,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        console: Console,
    ) -> Self {
        info!(
            first = first.name(),
            second = second.name(),
            "Creating turn controller"
        );
        Self {
            board,
            players: [first, second],
            state: TurnState::AwaitingMove(Seat::First),
            history: Vec::new(),
            console,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &dyn Player {
        self.players[seat.index()].as_ref()
    }

    /// The player to move, while the game is running.
    pub fn current_player(&self) -> Option<&dyn Player> {
        match self.state {
            TurnState::AwaitingMove(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    /// The outcome, once the game has stopped.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::AwaitingMove(_) => None,
            TurnState::Won(seat) => {
                let winner = self.player(seat);
                Some(Outcome::Winner {
                    name: winner.name().to_string(),
                    marker: winner.marker(),
                })
            }
            TurnState::Drawn => Some(Outcome::Draw),
        }
    }

    /// Plays one turn and returns the resulting state.
    ///
    /// A terminal state is returned unchanged. A board that is already full
    /// ends the game as a draw without asking anyone for a move.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub async fn step(&mut self) -> Result<TurnState> {
        let seat = match self.state {
            TurnState::AwaitingMove(seat) => seat,
            terminal => return Ok(terminal),
        };

        if self.board.is_full() {
            self.state = TurnState::Drawn;
            return Ok(self.state);
        }

        self.console.emit(GameEvent::BoardChanged(self.board));

        let player = &mut self.players[seat.index()];
        let name = player.name().to_string();
        let marker = player.marker();
        debug!(player = %name, "Waiting for move");

        let coords = player.take_turn(&mut self.board, &mut self.console).await?;
        anyhow::ensure!(
            self.board.get(coords) == Some(marker),
            "{name} reported {coords} without placing {marker} there"
        );

        let action = Move::new(marker, coords);
        self.history.push(action);
        self.console.emit(GameEvent::MoveMade { name, action });

        self.state = if self.board.winning_combination(marker) {
            TurnState::Won(seat)
        } else if self.board.is_full() {
            TurnState::Drawn
        } else {
            TurnState::AwaitingMove(seat.other())
        };
        debug!(state = ?self.state, "Turn resolved");

        Ok(self.state)
    }

    /// Plays until someone wins or the board fills, then announces the result.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game");

        let outcome = loop {
            self.step().await?;
            if let Some(outcome) = self.outcome() {
                break outcome;
            }
        };

        self.console.emit(GameEvent::BoardChanged(self.board));
        let winner = match &outcome {
            Outcome::Winner { name, .. } => Some(name.clone()),
            Outcome::Draw => None,
        };
        self.console.emit(GameEvent::GameOver { winner });

        info!(%outcome, moves = self.history.len(), "Game over");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ComputerPlayer, HumanPlayer, RecordingOutput, ScriptedInput};
    use crate::games::tictactoe::Coordinates;
    use std::time::Duration;

    fn humans(script: &[&str]) -> (TurnController, RecordingOutput) {
        let output = RecordingOutput::new();
        let console = Console::new(ScriptedInput::new(script.iter().copied()), output.clone());
        let controller = TurnController::new(
            Box::new(HumanPlayer::new("Ada", Marker::X)),
            Box::new(HumanPlayer::new("Bob", Marker::O)),
            console,
        );
        (controller, output)
    }

    #[tokio::test]
    async fn test_players_alternate() {
        let (mut controller, _) = humans(&["0,0", "1,1"]);
        assert_eq!(controller.state(), TurnState::AwaitingMove(Seat::First));
        assert_eq!(controller.current_player().map(|p| p.name()), Some("Ada"));

        controller.step().await.unwrap();
        assert_eq!(controller.state(), TurnState::AwaitingMove(Seat::Second));
        assert_eq!(controller.current_player().map(|p| p.name()), Some("Bob"));

        controller.step().await.unwrap();
        assert_eq!(controller.state(), TurnState::AwaitingMove(Seat::First));
        assert_eq!(
            controller.history(),
            &[
                Move::new(Marker::X, Coordinates::new(0, 0)),
                Move::new(Marker::O, Coordinates::new(1, 1)),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_input_does_not_change_turn() {
        let (mut controller, _) = humans(&["5,5", "0,0"]);
        controller.step().await.unwrap();
        assert_eq!(controller.board().marker_count(), 1);
        assert_eq!(controller.state(), TurnState::AwaitingMove(Seat::Second));
    }

    #[tokio::test]
    async fn test_terminal_state_is_sticky() {
        let (mut controller, _) = humans(&["0,0", "0,1", "1,0", "1,1", "2,0"]);
        let outcome = controller.run().await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Winner {
                name: "Ada".to_string(),
                marker: Marker::X
            }
        );
        assert_eq!(controller.step().await.unwrap(), TurnState::Won(Seat::First));
        assert!(controller.current_player().is_none());
    }

    #[tokio::test]
    async fn test_full_board_draws_without_asking() {
        // X O X / X O O / O X X
        let x = Some(Marker::X);
        let o = Some(Marker::O);
        let board = Board::from_cells([[x, o, x], [x, o, o], [o, x, x]]);
        let output = RecordingOutput::new();
        let mut controller = TurnController::with_board(
            board,
            Box::new(HumanPlayer::new("Ada", Marker::X)),
            Box::new(HumanPlayer::new("Bob", Marker::O)),
            Console::new(ScriptedInput::default(), output.clone()),
        );

        assert_eq!(controller.step().await.unwrap(), TurnState::Drawn);
        assert!(
            !output
                .events()
                .iter()
                .any(|e| matches!(e, GameEvent::AwaitingMove { .. }))
        );
    }

    #[tokio::test]
    async fn test_computer_takes_the_win() {
        let mut board = Board::new();
        board.place(Coordinates::new(0, 0), Marker::O).unwrap();
        board.place(Coordinates::new(0, 1), Marker::O).unwrap();
        board.place(Coordinates::new(1, 0), Marker::X).unwrap();
        board.place(Coordinates::new(2, 0), Marker::X).unwrap();

        let computer = ComputerPlayer::new("HAL", Marker::O, Marker::X)
            .with_think_delay(Duration::ZERO)
            .with_seed(3);
        let mut controller = TurnController::with_board(
            board,
            Box::new(computer),
            Box::new(HumanPlayer::new("Ada", Marker::X)),
            Console::new(ScriptedInput::default(), RecordingOutput::new()),
        );

        assert_eq!(controller.step().await.unwrap(), TurnState::Won(Seat::First));
        assert_eq!(controller.board().get(Coordinates::new(0, 2)), Some(Marker::O));
    }

    #[tokio::test]
    async fn test_run_announces_winner_after_final_board() {
        let (mut controller, output) = humans(&["0,0", "0,1", "1,0", "1,1", "2,0"]);
        controller.run().await.unwrap();

        let events = output.events();
        let n = events.len();
        assert!(matches!(events[n - 2], GameEvent::BoardChanged(_)));
        assert_eq!(
            events[n - 1],
            GameEvent::GameOver {
                winner: Some("Ada".to_string())
            }
        );
    }
}
