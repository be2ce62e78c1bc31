//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coordinates, Marker};
use tracing::instrument;

/// The eight lines that win the game, as `(x, y)` coordinates.
pub const LINES: [[(i32, i32); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks whether `marker` fills any row, column or diagonal.
///
/// Lines are read from the current cells on every call.
#[instrument(skip(board))]
pub fn has_winning_line(board: &Board, marker: Marker) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(x, y)| board.get(Coordinates::new(x, y)) == Some(marker))
    })
}
