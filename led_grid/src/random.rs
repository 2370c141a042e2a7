// random.rs - Random initial states

use std::ops::Range;

use log::trace;
use rand::Rng;

use crate::grid::{ALIVE, Grid};
use crate::symmetry::{SYMMETRY_ROLL_RANGE, Symmetry};

/// Source of uniform integers for seeding grids.
pub trait CellRng {
    /// Returns a uniform integer in `[min, max)`, or `min` if the range is
    /// empty.
    fn random_between(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> CellRng for R {
    fn random_between(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.random_range(min..max)
    }
}

/// Range the live-cell draw count is picked from: `[3/16, 1/2)` of the grid.
pub const fn random_cell_count_range<const COLS: usize, const ROWS: usize>() -> Range<usize> {
    3 * COLS * ROWS / 16..COLS * ROWS / 2
}

impl<const COLS: usize, const ROWS: usize> Grid<COLS, ROWS> {
    /// Replaces the grid with random noise and sometimes symmetrizes it.
    ///
    /// Draws, in order: the number of cells to set, one `(x, y)` pair per
    /// cell, then the symmetry roll. Repeated coordinates are not redrawn, so
    /// the grid may end up with fewer live cells than were drawn. Returns the
    /// treatment that was applied.
    pub fn init_random_state<R: CellRng + ?Sized>(&mut self, rng: &mut R) -> Symmetry {
        self.clear();

        let counts = random_cell_count_range::<COLS, ROWS>();
        let num = rng.random_between(counts.start, counts.end);
        for _ in 0..num {
            let x = rng.random_between(0, COLS);
            let y = rng.random_between(0, ROWS);
            self.cells[x][y] = ALIVE;
        }

        let roll = rng.random_between(0, SYMMETRY_ROLL_RANGE);
        let symmetry = Symmetry::from_roll(roll, Self::IS_SQUARE);
        self.apply_symmetry(symmetry);

        trace!(
            "random state: drew {} cells, roll {} -> symmetry {}",
            num, roll, symmetry
        );
        symmetry
    }
}
