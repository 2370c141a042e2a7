// symmetry.rs - Pseudo-symmetrization of grids
//
// Each transform copies one half (or triangle) of the grid over its mirror
// image. The source half is never touched and the grid is not checked for
// symmetry first.

use std::fmt;

use crate::grid::Grid;

/// Width of the roll that picks a symmetry for a freshly randomized grid.
pub const SYMMETRY_ROLL_RANGE: usize = 64;

/// Symmetry treatment applied to a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Left as is.
    None,
    /// Mirrored left to right.
    X,
    /// Mirrored top to bottom.
    Y,
    /// Mirrored in X, then in Y.
    XY,
    /// Upper triangle copied onto the lower one. Square grids only.
    Diag1,
    /// Lower triangle copied onto the upper one. Square grids only.
    Diag2,
}

impl Symmetry {
    /// Every treatment, in roll order.
    pub const ALL: [Symmetry; 6] = [
        Symmetry::None,
        Symmetry::X,
        Symmetry::Y,
        Symmetry::XY,
        Symmetry::Diag1,
        Symmetry::Diag2,
    ];

    /// Maps a roll in `0..SYMMETRY_ROLL_RANGE` to a treatment.
    ///
    /// The table is fixed: `0` is X, `1` is Y, `2` and `3` are XY, `4` and
    /// `5` are the diagonals when `square` is set. Everything else, including
    /// `4` and `5` on a non-square grid, keeps the grid as is.
    pub const fn from_roll(roll: usize, square: bool) -> Self {
        match roll {
            0 => Symmetry::X,
            1 => Symmetry::Y,
            2 | 3 => Symmetry::XY,
            4 if square => Symmetry::Diag1,
            5 if square => Symmetry::Diag2,
            _ => Symmetry::None,
        }
    }

    /// Whether the treatment needs a square grid.
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Symmetry::Diag1 | Symmetry::Diag2)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Symmetry::None => "none",
            Symmetry::X => "x",
            Symmetry::Y => "y",
            Symmetry::XY => "xy",
            Symmetry::Diag1 => "diag1",
            Symmetry::Diag2 => "diag2",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<const COLS: usize, const ROWS: usize> Grid<COLS, ROWS> {
    /// Copies column `x` onto column `COLS - 1 - x` for the left half. The
    /// middle column of an odd-width grid stays as is.
    pub fn symmetrize_in_x(&mut self) {
        for x in 0..COLS / 2 {
            for y in 0..ROWS {
                self.cells[COLS - 1 - x][y] = self.cells[x][y];
            }
        }
    }

    /// Copies row `y` onto row `ROWS - 1 - y` for the top half.
    pub fn symmetrize_in_y(&mut self) {
        for x in 0..COLS {
            for y in 0..ROWS / 2 {
                self.cells[x][ROWS - 1 - y] = self.cells[x][y];
            }
        }
    }

    /// Applies one treatment. Diagonal treatments do nothing unless the grid
    /// is square.
    pub fn apply_symmetry(&mut self, symmetry: Symmetry) {
        match symmetry {
            Symmetry::None => (),
            Symmetry::X => self.symmetrize_in_x(),
            Symmetry::Y => self.symmetrize_in_y(),
            Symmetry::XY => {
                self.symmetrize_in_x();
                self.symmetrize_in_y();
            }
            Symmetry::Diag1 if Self::IS_SQUARE => self.copy_upper_triangle(),
            Symmetry::Diag2 if Self::IS_SQUARE => self.copy_lower_triangle(),
            Symmetry::Diag1 | Symmetry::Diag2 => (),
        }
    }

    // Both triangle copies stay inside the leading square block, so they are
    // in bounds for any size. They only mean anything on a square grid.

    fn copy_upper_triangle(&mut self) {
        let n = COLS.min(ROWS);
        for x in 0..n {
            for y in 0..x {
                self.cells[x][y] = self.cells[y][x];
            }
        }
    }

    fn copy_lower_triangle(&mut self) {
        let n = COLS.min(ROWS);
        for x in 0..n {
            for y in x..n {
                self.cells[x][y] = self.cells[y][x];
            }
        }
    }
}

impl<const N: usize> Grid<N, N> {
    /// Sets `cells[x][y] = cells[y][x]` for every `y < x`, leaving the
    /// diagonal and the `y > x` triangle unchanged.
    pub fn symmetrize_in_diag1(&mut self) {
        self.copy_upper_triangle();
    }

    /// Sets `cells[x][y] = cells[y][x]` for every `y >= x`, leaving the
    /// `y < x` triangle unchanged.
    pub fn symmetrize_in_diag2(&mut self) {
        self.copy_lower_triangle();
    }
}
