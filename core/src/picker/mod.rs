use crate::*;
pub use random::*;

mod random;

/// Chooses which dark cell lights up next.
pub trait CellPicker {
    /// Returns a dark cell of `grid`, or `None` once every cell is lit.
    fn pick(&mut self, grid: &Grid) -> Option<CellIndex>;
}
