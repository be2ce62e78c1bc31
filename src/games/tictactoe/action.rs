//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A rejected placement is a
//! value the caller reports, never a panic.

use super::{Coordinates, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a marker written at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coordinates: Coordinates,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(marker: Marker, coordinates: Coordinates) -> Self {
        Self {
            marker,
            coordinates,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coordinates)
    }
}

/// Why a placement was refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// A component lies outside `[0, 2]`.
    #[display("Coordinates {_0} are out of bounds. Try something between 0,0 and 2,2")]
    OutOfBounds(Coordinates),

    /// The cell already holds a marker.
    #[display("There is already a piece at {_0}. Try a different one")]
    Occupied(Coordinates),
}

impl std::error::Error for PlaceError {}

/// Raw move input that is not an `x,y` pair.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Your coordinates are not in the right format. Try x,y (e.g. '1,1'), got {fields} field(s)")]
pub struct CoordinatesFormatError {
    /// Number of comma-separated fields that were found.
    pub fields: usize,
}

impl std::error::Error for CoordinatesFormatError {}
