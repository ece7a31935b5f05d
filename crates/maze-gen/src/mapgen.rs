//! Random maze generation.
//!
//! Each interior cell is opened independently with probability
//! `chance / (chance + 2)`; everything else, including the border, stays
//! blocked. No connectivity guarantee is made.

use log::debug;
use maze_core::{CellState, Grid};
use rand::{Rng, RngExt};

/// Maze generator owning its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Clear `grid` and re-randomize its interior.
    ///
    /// Returns the number of open cells.
    pub fn random_maze(&mut self, grid: &mut Grid, chance: u32) -> usize {
        grid.clear();
        let rng = &mut self.rng;
        let denominator = chance.saturating_add(2);
        grid.fill_interior(|_| {
            if rng.random_ratio(chance, denominator) {
                CellState::Open
            } else {
                CellState::Blocked
            }
        });
        let open = grid.count(CellState::Open);
        debug!(
            "random maze: {open}/{} cells open (chance {chance})",
            grid.vertex_count()
        );
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MapGen<StdRng> {
        MapGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn border_stays_blocked() {
        let mut grid = Grid::new(12);
        let mut mg = seeded(1);
        mg.random_maze(&mut grid, 1000);
        let side = grid.side();
        for (p, c) in grid.iter() {
            if p.x == 0 || p.y == 0 || p.x == side + 1 || p.y == side + 1 {
                assert_eq!(c, CellState::Blocked, "border cell {p} opened");
            }
        }
    }

    #[test]
    fn zero_chance_blocks_everything() {
        let mut grid = Grid::new(8);
        let open = seeded(2).random_maze(&mut grid, 0);
        assert_eq!(open, 0);
        assert_eq!(grid.count(CellState::Blocked), 100);
    }

    #[test]
    fn density_tracks_chance() {
        let mut grid = Grid::new(40);
        let open = seeded(3).random_maze(&mut grid, 6);
        // Expected 75% of 1600 = 1200.
        assert!((1050..1350).contains(&open), "open = {open}");
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(16);
        let mut b = Grid::new(16);
        seeded(42).random_maze(&mut a, 2);
        seeded(42).random_maze(&mut b, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn regeneration_resets_previous_markers() {
        let mut grid = Grid::new(6);
        let mut mg = seeded(5);
        grid.fill_interior(|_| CellState::OnPath);
        grid.set(Point::new(2, 2), CellState::Source);
        mg.random_maze(&mut grid, 2);
        assert_eq!(grid.count(CellState::OnPath), 0);
        assert_eq!(grid.count(CellState::Source), 0);
    }
}
