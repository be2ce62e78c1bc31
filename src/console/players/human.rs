//! Human player that types coordinates.

use super::Player;
use crate::console::{Console, GameEvent, MoveRejection};
use crate::games::tictactoe::{Board, Coordinates, Marker};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Human player reading `x,y` lines from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    marker: Marker,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn take_turn(&mut self, board: &mut Board, console: &mut Console) -> Result<Coordinates> {
        // Ask until a line parses and the board accepts it.
        loop {
            console.emit(GameEvent::AwaitingMove {
                name: self.name.clone(),
                marker: self.marker,
            });
            let line = console.read_line().await?;

            let rejection = match Coordinates::parse_lenient(&line) {
                Ok(coords) => match board.place(coords, self.marker) {
                    Ok(()) => {
                        info!(%coords, "Human placed marker");
                        return Ok(coords);
                    }
                    Err(e) => MoveRejection::from(e),
                },
                Err(e) => MoveRejection::from(e),
            };

            debug!(%rejection, line = %line, "Move rejected");
            console.emit(GameEvent::MoveRejected(rejection));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ReaderInput, RecordingOutput, ScriptedInput};
    use crate::games::tictactoe::PlaceError;

    #[tokio::test]
    async fn test_retries_until_valid_move() {
        let mut board = Board::new();
        board.place(Coordinates::CENTER, Marker::O).unwrap();
        let output = RecordingOutput::new();
        let mut console = Console::new(
            ScriptedInput::new(["nonsense", "3,0", "1,1", "0,2"]),
            output.clone(),
        );
        let mut human = HumanPlayer::new("Ada", Marker::X);

        let coords = human.take_turn(&mut board, &mut console).await.unwrap();

        assert_eq!(coords, Coordinates::new(0, 2));
        assert_eq!(board.get(coords), Some(Marker::X));
        assert_eq!(board.get(Coordinates::CENTER), Some(Marker::O));
        assert_eq!(board.marker_count(), 2);

        let rejections: Vec<_> = output
            .events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::MoveRejected(r) => Some(r),
                _ => None,
            })
            .collect();
        assert_eq!(rejections.len(), 3);
        assert!(matches!(rejections[0], MoveRejection::Format(_)));
        assert_eq!(
            rejections[1],
            MoveRejection::Placement(PlaceError::OutOfBounds(Coordinates::new(3, 0)))
        );
        assert_eq!(
            rejections[2],
            MoveRejection::Placement(PlaceError::Occupied(Coordinates::CENTER))
        );
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_asked_again() {
        let mut board = Board::new();
        let output = RecordingOutput::new();
        let mut console = Console::new(
            ReaderInput::new(&b"\xff\xfe\n\xc3,1\n0,0\n"[..]),
            output.clone(),
        );
        let mut human = HumanPlayer::new("Ada", Marker::X);

        let coords = human.take_turn(&mut board, &mut console).await.unwrap();

        // The second garbled line still has two fields and reads as 0,1.
        assert_eq!(coords, Coordinates::new(0, 1));
        let events = output.events();
        let prompts = events
            .iter()
            .filter(|e| matches!(e, GameEvent::AwaitingMove { .. }))
            .count();
        assert_eq!(prompts, 2);
        assert!(matches!(
            events.as_slice(),
            [
                GameEvent::AwaitingMove { .. },
                GameEvent::MoveRejected(MoveRejection::Format(_)),
                GameEvent::AwaitingMove { .. },
            ]
        ));
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let mut board = Board::new();
        let mut console = Console::new(ScriptedInput::new(["x"]), RecordingOutput::new());
        let mut human = HumanPlayer::new("Ada", Marker::X);

        assert!(human.take_turn(&mut board, &mut console).await.is_err());
        assert_eq!(board, Board::new());
    }
}
