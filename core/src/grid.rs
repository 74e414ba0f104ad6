use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of cells, each either lit (`true`) or dark (`false`).
///
/// A grid is never edited in place once handed out. [`Grid::with_revealed`] and [`Grid::cleared`] return a new
/// snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Grid {
    cells: Array2<bool>,
    revealed_count: usize,
}

impl Grid {
    pub fn new(side: usize) -> Self {
        Self {
            cells: Array2::default((side, side)),
            revealed_count: 0,
        }
    }

    pub fn for_mode(mode: Mode) -> Self {
        Self::new(mode.side())
    }

    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn unrevealed_count(&self) -> usize {
        self.len() - self.revealed_count
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.unrevealed_count() == 0
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        if index < self.len() {
            Ok(index_to_coords(index, self.side()))
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn is_revealed(&self, index: CellIndex) -> bool {
        self.validate_index(index)
            .is_ok_and(|coords| self.cells[coords.to_nd_index()])
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()]
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }

    /// Index of the `n`-th dark cell, counting in row-major order.
    pub fn nth_unrevealed(&self, n: usize) -> Option<CellIndex> {
        self.iter()
            .enumerate()
            .filter(|&(_, revealed)| !revealed)
            .map(|(index, _)| index)
            .nth(n)
    }

    pub fn with_revealed(&self, index: CellIndex) -> Result<Self> {
        let coords = self.validate_index(index)?;
        if self.cell_at(coords) {
            return Err(GameError::AlreadyRevealed);
        }

        let mut next = self.clone();
        next.cells[coords.to_nd_index()] = true;
        next.revealed_count += 1;
        Ok(next)
    }

    /// Same shape, every cell dark again.
    pub fn cleared(&self) -> Self {
        Self::new(self.side())
    }
}

impl TryFrom<Array2<bool>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        if cells.nrows() != cells.ncols() {
            return Err(GameError::InvalidGridShape);
        }

        let revealed_count = cells.iter().filter(|&&revealed| revealed).count();
        Ok(Self {
            cells,
            revealed_count,
        })
    }
}

impl From<Grid> for Array2<bool> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
