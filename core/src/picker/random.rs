use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Picks uniformly among the dark cells by drawing a rank among them and walking to it.
#[derive(Clone, Debug)]
pub struct RandomCellPicker {
    rng: SmallRng,
}

impl RandomCellPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl CellPicker for RandomCellPicker {
    fn pick(&mut self, grid: &Grid) -> Option<CellIndex> {
        let remaining = grid.unrevealed_count();
        if remaining == 0 {
            return None;
        }

        let rank = self.rng.random_range(0..remaining);
        let picked = grid.nth_unrevealed(rank);
        if picked.is_none() {
            log::warn!(
                "Grid reported {} dark cells but rank {} was not found",
                remaining,
                rank
            );
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_only_dark_cells_until_full() {
        let mut picker = RandomCellPicker::new(42);
        let mut grid = Grid::new(4);
        let mut seen = Vec::new();

        while let Some(index) = picker.pick(&grid) {
            assert!(!grid.is_revealed(index));
            grid = grid.with_revealed(index).unwrap();
            seen.push(index);
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..16).collect::<Vec<_>>());
        assert!(grid.is_fully_revealed());
    }

    #[test]
    fn same_seed_gives_same_order() {
        let grid = Grid::new(10);
        let mut a = RandomCellPicker::new(7);
        let mut b = RandomCellPicker::new(7);

        for _ in 0..10 {
            assert_eq!(a.pick(&grid), b.pick(&grid));
        }
    }

    #[test]
    fn last_dark_cell_is_always_chosen() {
        let mut grid = Grid::new(3);
        for index in (0..9).filter(|&index| index != 5) {
            grid = grid.with_revealed(index).unwrap();
        }

        let mut picker = RandomCellPicker::new(0);

        assert_eq!(picker.pick(&grid), Some(5));
    }
}
