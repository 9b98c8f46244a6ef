use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a presentation layer needs to redraw after a move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub dimensions: Coord,
    pub cells: Array2<CellView>,
    pub status: GameStatus,
    pub remaining_mines: isize,
    pub starting_point: Option<Coord2>,
}

impl BoardSnapshot {
    pub fn from_board<G: MineGenerator>(board: &Board<G>) -> Self {
        let dimensions = board.dimensions();
        let mut cells = Array2::from_elem((dimensions, dimensions).to_nd_index(), CellView::Hidden);
        for (coords, cell) in board.iter_cells() {
            cells[coords.to_nd_index()] = cell.view();
        }

        Self {
            dimensions,
            cells,
            status: board.status(),
            remaining_mines: board.remaining_mine_count(),
            starting_point: board.starting_point(),
        }
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Checks a snapshot that came from outside, e.g. deserialized.
    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.dimensions), usize::from(self.dimensions));
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }
        if let Some(start) = self.starting_point {
            if !in_bounds(start, self.dimensions) {
                return Err(GameError::InvalidCoords);
            }
        }
        Ok(())
    }
}

impl<G: MineGenerator> From<&Board<G>> for BoardSnapshot {
    fn from(board: &Board<G>) -> Self {
        Self::from_board(board)
    }
}
