//! Core domain types for tic-tac-toe.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// The symbol a player writes into a cell.
///
/// Usually `X` or `O`, but any non-whitespace character chosen during setup works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
pub struct Marker(char);

impl Marker {
    /// Default marker for the player seated first.
    pub const X: Marker = Marker('X');
    /// Default marker for the player seated second.
    pub const O: Marker = Marker('O');
    /// Symbol the board draws for an unoccupied cell.
    pub const EMPTY_CELL: char = '-';

    /// Creates a marker from a character.
    ///
    /// Returns `None` for whitespace and for [`Marker::EMPTY_CELL`], both of
    /// which would render like an empty cell.
    #[instrument]
    pub fn new(symbol: char) -> Option<Self> {
        if symbol.is_whitespace() || symbol == Self::EMPTY_CELL {
            None
        } else {
            Some(Self(symbol))
        }
    }

    /// Returns the underlying character.
    pub fn symbol(self) -> char {
        self.0
    }
}

/// A `(x, y)` position on the board.
///
/// `x` selects the column and `y` selects the row. Components are signed and
/// unchecked so that anything a user types can be represented and rejected
/// by the board instead of failing during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{x},{y}")]
pub struct Coordinates {
    /// Column index.
    x: i32,
    /// Row index.
    y: i32,
}

impl Coordinates {
    /// The middle cell.
    pub const CENTER: Coordinates = Coordinates { x: 1, y: 1 };

    /// Column index.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Row index.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns `(row, column)` storage indices when both components are on the board.
    pub fn cell_index(self) -> Option<(usize, usize)> {
        let col = usize::try_from(self.x).ok().filter(|c| *c < BOARD_SIZE)?;
        let row = usize::try_from(self.y).ok().filter(|r| *r < BOARD_SIZE)?;
        Some((row, col))
    }

    /// Whether both components lie in `[0, 2]`.
    pub fn in_bounds(self) -> bool {
        self.cell_index().is_some()
    }

    /// Every on-board coordinate, `x` outer and `y` inner.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..BOARD_SIZE as i32)
            .flat_map(|x| (0..BOARD_SIZE as i32).map(move |y| Coordinates::new(x, y)))
    }
}
