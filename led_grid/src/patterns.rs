// patterns.rs - Named starting patterns that fit the LED matrix

use crate::grid::{ALIVE, Grid};

pub struct Pattern {
    pub name: &'static str,
    /// Live cells as `(x, y)`.
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(3, 2), (3, 3), (3, 4)],
    },
    Pattern {
        name: "Toad",
        cells: &[(2, 3), (3, 3), (4, 3), (1, 4), (2, 4), (3, 4)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2), (3, 3), (4, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "Block",
        cells: &[(3, 3), (4, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(3, 2), (4, 2), (2, 3), (3, 3), (3, 4)],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and sets the pattern's cells. Cells that do not fit are
/// dropped.
pub fn apply_pattern<const COLS: usize, const ROWS: usize>(
    grid: &mut Grid<COLS, ROWS>,
    pattern: &Pattern,
) {
    grid.clear();
    for &(x, y) in pattern.cells {
        if x < COLS && y < ROWS {
            grid.cells[x][y] = ALIVE;
        }
    }
}
