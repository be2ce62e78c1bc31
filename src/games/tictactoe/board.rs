//! The 3x3 board.

use super::action::PlaceError;
use super::rules;
use super::types::{BOARD_SIZE, Coordinates, Marker};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Cells stored by row, then column (`cells[y][x]`).
pub type Cells = [[Option<Marker>; BOARD_SIZE]; BOARD_SIZE];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from existing cells.
    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    /// Returns the raw cells, rows first.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Returns the marker at `coords`, or `None` when empty or off the board.
    pub fn get(&self, coords: Coordinates) -> Option<Marker> {
        let (row, col) = coords.cell_index()?;
        self.cells[row][col]
    }

    /// Whether `coords` is on the board and unoccupied.
    pub fn is_empty_at(&self, coords: Coordinates) -> bool {
        coords
            .cell_index()
            .is_some_and(|(row, col)| self.cells[row][col].is_none())
    }

    /// Empty cells in scan order (`x` outer, `y` inner).
    pub fn empty_cells(&self) -> Vec<Coordinates> {
        Coordinates::all().filter(|c| self.is_empty_at(*c)).collect()
    }

    /// Number of occupied cells.
    pub fn marker_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Writes `marker` at `coords` if the cell is on the board and empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] or [`PlaceError::Occupied`];
    /// the board is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn place(&mut self, coords: Coordinates, marker: Marker) -> Result<(), PlaceError> {
        let (row, col) = coords
            .cell_index()
            .ok_or(PlaceError::OutOfBounds(coords))?;
        let cell = &mut self.cells[row][col];
        if cell.is_some() {
            return Err(PlaceError::Occupied(coords));
        }
        *cell = Some(marker);
        Ok(())
    }

    /// Boolean form of [`Board::place`].
    ///
    /// Failures are logged as warnings unless `silent` is set, which the
    /// move heuristic uses while probing cells.
    pub fn add_piece(&mut self, coords: Coordinates, marker: Marker, silent: bool) -> bool {
        match self.place(coords, marker) {
            Ok(()) => true,
            Err(e) => {
                if !silent {
                    warn!(error = %e, %marker, "Rejected placement");
                }
                false
            }
        }
    }

    /// Clears `coords` only if it currently holds `marker`.
    ///
    /// Any other marker, an empty cell or an off-board position is left alone.
    pub fn remove_piece(&mut self, coords: Coordinates, marker: Marker) {
        if let Some((row, col)) = coords.cell_index()
            && self.cells[row][col] == Some(marker)
        {
            self.cells[row][col] = None;
        }
    }

    /// Whether `marker` fills a row, column or diagonal.
    pub fn winning_combination(&self, marker: Marker) -> bool {
        rules::has_winning_line(self, marker)
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the board with column indices (x) across and row indices (y) down.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("x       0   1   2\n");
        out.push_str("------------------\n");
        out.push_str("y |\n");
        for (y, row) in self.cells.iter().enumerate() {
            out.push_str(&format!("{y} |    "));
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(marker) => out.push_str(&format!(" {marker} ")),
                    None => out.push_str(&format!(" {} ", Marker::EMPTY_CELL)),
                }
                if x + 1 < BOARD_SIZE {
                    out.push('|');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
