// grid.rs - Fixed-size cell grid for the LED matrix

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// Value stored per cell. The model writes only `DEAD` and `ALIVE`; the
/// renderer may keep fade state in the remaining values.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// A state is nontrivial once it has more live cells than this.
pub const NONTRIVIAL_THRESHOLD: usize = 4;

/// `COLS x ROWS` grid of cells, stored column-major as `cells[x][y]`.
///
/// Grids have no identity beyond their contents: two grids are equal iff
/// every cell is equal.
#[derive(Debug, Copy, Clone)]
pub struct Grid<const COLS: usize, const ROWS: usize> {
    pub(crate) cells: [[Cell; ROWS]; COLS],
}

impl<const COLS: usize, const ROWS: usize> Grid<COLS, ROWS> {
    pub const COLS: usize = COLS;
    pub const ROWS: usize = ROWS;
    /// Whether the diagonal symmetries apply to this grid size.
    pub const IS_SQUARE: bool = COLS == ROWS;

    /// Creates a grid with every cell dead.
    pub const fn empty() -> Self {
        Self {
            cells: [[DEAD; ROWS]; COLS],
        }
    }

    /// Wraps raw column-major cells.
    pub const fn from_cells(cells: [[Cell; ROWS]; COLS]) -> Self {
        Self { cells }
    }

    /// Parses one text row per `y`, top to bottom. `#` is alive, `.` is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        if rows.len() != ROWS {
            return Err(GridError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }
        let mut grid = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != COLS {
                return Err(GridError::RowWidth {
                    row: y,
                    expected: COLS,
                    found: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                grid.cells[x][y] = match ch {
                    '#' => ALIVE,
                    '.' => DEAD,
                    found => return Err(GridError::InvalidCell { row: y, col: x, found }),
                };
            }
        }
        Ok(grid)
    }

    pub fn cells(&self) -> &[[Cell; ROWS]; COLS] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(x)?.get(y).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        let slot = self
            .cells
            .get_mut(x)
            .and_then(|column| column.get_mut(y))
            .ok_or(GridError::OutOfBounds {
                x,
                y,
                cols: COLS,
                rows: ROWS,
            })?;
        *slot = cell;
        Ok(())
    }

    /// Flips a cell between dead and alive. Returns `false` if `(x, y)` is
    /// outside the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.cells.get_mut(x).and_then(|column| column.get_mut(y)) {
            Some(cell) => {
                *cell = if *cell == DEAD { ALIVE } else { DEAD };
                true
            }
            None => false,
        }
    }

    /// Sets every cell to `DEAD`.
    pub fn clear(&mut self) {
        for x in 0..COLS {
            for y in 0..ROWS {
                self.cells[x][y] = DEAD;
            }
        }
    }

    /// Overwrites every cell with the matching cell of `from`.
    pub fn copy_from(&mut self, from: &Self) {
        for x in 0..COLS {
            for y in 0..ROWS {
                self.cells[x][y] = from.cells[x][y];
            }
        }
    }

    /// Exchanges the contents of two grids cell by cell.
    pub fn swap_with(&mut self, other: &mut Self) {
        for x in 0..COLS {
            for y in 0..ROWS {
                let t = self.cells[x][y];
                self.cells[x][y] = other.cells[x][y];
                other.cells[x][y] = t;
            }
        }
    }

    /// Compares column by column and stops at the first differing cell.
    pub fn is_identical_to(&self, other: &Self) -> bool {
        for x in 0..COLS {
            for y in 0..ROWS {
                if self.cells[x][y] != other.cells[x][y] {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        for x in 0..COLS {
            for y in 0..ROWS {
                if self.cells[x][y] != DEAD {
                    return false;
                }
            }
        }
        true
    }

    /// Number of cells that are not `DEAD`. Always scans the whole grid.
    pub fn count_nonzero_pixels(&self) -> usize {
        let mut nnz = 0;
        for x in 0..COLS {
            for y in 0..ROWS {
                if self.cells[x][y] != DEAD {
                    nnz += 1;
                }
            }
        }
        nnz
    }

    /// Whether more than `NONTRIVIAL_THRESHOLD` cells are alive. Stops
    /// scanning as soon as the answer is known.
    pub fn is_nontrivial(&self) -> bool {
        let mut nnz = 0;
        for x in 0..COLS {
            for y in 0..ROWS {
                if self.cells[x][y] != DEAD {
                    nnz += 1;
                    if nnz > NONTRIVIAL_THRESHOLD {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl<const COLS: usize, const ROWS: usize> Default for Grid<COLS, ROWS> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const COLS: usize, const ROWS: usize> PartialEq for Grid<COLS, ROWS> {
    fn eq(&self, other: &Self) -> bool {
        self.is_identical_to(other)
    }
}
impl<const COLS: usize, const ROWS: usize> Eq for Grid<COLS, ROWS> {}

impl<const COLS: usize, const ROWS: usize> Index<(usize, usize)> for Grid<COLS, ROWS> {
    type Output = Cell;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        &self.cells[x][y]
    }
}
impl<const COLS: usize, const ROWS: usize> IndexMut<(usize, usize)> for Grid<COLS, ROWS> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Cell {
        &mut self.cells[x][y]
    }
}

/// Prints one line per row, top to bottom, in the format `from_rows` reads.
impl<const COLS: usize, const ROWS: usize> fmt::Display for Grid<COLS, ROWS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS {
            for x in 0..COLS {
                let ch = if self.cells[x][y] == DEAD { '.' } else { '#' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Grid4 = Grid<4, 4>;

    fn glider() -> Grid4 {
        Grid4::from_rows(&[
            ".#..", //
            "..#.", //
            "###.", //
            "....", //
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_is_column_major() {
        let grid = glider();
        assert_eq!(grid[(1, 0)], ALIVE);
        assert_eq!(grid[(0, 1)], DEAD);
        assert_eq!(grid[(2, 1)], ALIVE);
        assert_eq!(grid.cells()[0], [DEAD, DEAD, ALIVE, DEAD]);
        assert_eq!(grid.count_nonzero_pixels(), 5);
    }

    #[test]
    fn test_display_matches_from_rows() {
        let grid = glider();
        assert_eq!(grid.to_string(), ".#..\n..#.\n###.\n....\n");
        let text = grid.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(Grid4::from_rows(&rows).unwrap(), grid);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Grid4::from_rows(&["....", "...."]),
            Err(GridError::RowCount { expected: 4, found: 2 })
        );
        assert_eq!(
            Grid4::from_rows(&["....", ".....", "....", "...."]),
            Err(GridError::RowWidth { row: 1, expected: 4, found: 5 })
        );
        assert_eq!(
            Grid4::from_rows(&["....", "....", "..o.", "...."]),
            Err(GridError::InvalidCell { row: 2, col: 2, found: 'o' })
        );
    }

    #[test]
    fn test_clear() {
        let mut grid = glider();
        assert!(!grid.is_empty());
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid, Grid4::empty());
        assert_eq!(grid, Grid4::default());
    }

    #[test]
    fn test_copy_from() {
        let src = glider();
        let mut dst = Grid4::from_cells([[ALIVE; 4]; 4]);
        dst.copy_from(&src);
        assert!(dst.is_identical_to(&src));
        assert_eq!(src, glider());
    }

    #[test]
    fn test_swap_with() {
        let mut a = glider();
        let mut b = Grid4::from_cells([[ALIVE; 4]; 4]);
        let (a0, b0) = (a, b);
        a.swap_with(&mut b);
        assert!(a.is_identical_to(&b0));
        assert!(b.is_identical_to(&a0));
    }

    #[test]
    fn test_identical_sees_non_binary_values() {
        let a = glider();
        let mut b = a;
        assert!(a.is_identical_to(&b));
        b[(1, 0)] = 7;
        assert!(!a.is_identical_to(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_nonzero_counts_fade_values() {
        let mut grid = Grid4::empty();
        grid[(3, 3)] = 200;
        assert!(!grid.is_empty());
        assert_eq!(grid.count_nonzero_pixels(), 1);
    }

    #[test]
    fn test_nontrivial_threshold() {
        let mut grid = Grid4::empty();
        for i in 0..NONTRIVIAL_THRESHOLD {
            grid.set(i % 4, i / 4, ALIVE).unwrap();
        }
        assert_eq!(grid.count_nonzero_pixels(), 4);
        assert!(!grid.is_nontrivial());
        grid.set(3, 3, ALIVE).unwrap();
        assert!(grid.is_nontrivial());
        assert!(glider().is_nontrivial());
    }

    #[test]
    fn test_get_set_toggle_bounds() {
        let mut grid = Grid::<3, 2>::empty();
        assert_eq!(grid.get(2, 1), Some(DEAD));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(
            grid.set(3, 0, ALIVE),
            Err(GridError::OutOfBounds { x: 3, y: 0, cols: 3, rows: 2 })
        );
        assert!(grid.toggle(2, 1));
        assert_eq!(grid.get(2, 1), Some(ALIVE));
        assert!(grid.toggle(2, 1));
        assert_eq!(grid.get(2, 1), Some(DEAD));
        assert!(!grid.toggle(0, 5));
        assert!(!Grid::<3, 2>::IS_SQUARE);
    }
}
