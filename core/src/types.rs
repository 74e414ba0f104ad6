/// Row-major position of a cell in the grid.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (usize, usize);

/// Milliseconds, the unit every timer in the game is expressed in.
pub type Millis = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Splits a row-major index into coordinates for a square board of `side` cells.
pub const fn index_to_coords(index: CellIndex, side: usize) -> Coord2 {
    (index / side, index % side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_splits_row_major() {
        assert_eq!(index_to_coords(0, 5), (0, 0));
        assert_eq!(index_to_coords(4, 5), (0, 4));
        assert_eq!(index_to_coords(5, 5), (1, 0));
        assert_eq!(index_to_coords(99, 10), (9, 9));
    }
}
