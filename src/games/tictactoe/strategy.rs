//! Move selection for the computer player.
//!
//! Three tiers, first match wins: complete a line of our own, block a line
//! the opponent could complete next move, otherwise take the center or a
//! random empty cell. Only single immediate threats are seen, so forks and
//! double threats slip through.

use super::{Board, Coordinates, Marker};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which tier of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tier {
    /// Completes one of our own lines.
    Win,
    /// Occupies the cell the opponent needs to complete a line.
    Block,
    /// Takes the free center cell.
    Center,
    /// Any empty cell.
    Random,
}

/// Picks the computer's next cell.
///
/// `board` is never modified; probing happens on a scratch copy. Returns
/// `None` only when the board is full.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Coordinates> {
    plan_move(board, own, opponent, rng).map(|(coords, _)| coords)
}

/// Like [`select_move`], also reporting the tier that decided.
#[instrument(skip(board, rng))]
pub fn plan_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<(Coordinates, Tier)> {
    let mut scratch = *board;

    let plan = if let Some(coords) = completing_cell(&mut scratch, own) {
        Some((coords, Tier::Win))
    } else if let Some(coords) = completing_cell(&mut scratch, opponent) {
        Some((coords, Tier::Block))
    } else if scratch.is_empty_at(Coordinates::CENTER) {
        Some((Coordinates::CENTER, Tier::Center))
    } else {
        scratch
            .empty_cells()
            .choose(rng)
            .map(|coords| (*coords, Tier::Random))
    };

    debug!(?plan, "Planned move");
    plan
}

/// First empty cell, `x` outer and `y` inner, where `marker` would complete a line.
///
/// Each probe is undone before the next one, so `board` is unchanged on return.
fn completing_cell(board: &mut Board, marker: Marker) -> Option<Coordinates> {
    for coords in Coordinates::all() {
        if !board.add_piece(coords, marker, true) {
            continue;
        }
        let wins = board.winning_combination(marker);
        board.remove_piece(coords, marker);
        if wins {
            return Some(coords);
        }
    }
    None
}
