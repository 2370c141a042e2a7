//! Grid state model for an LED matrix running Game of Life animations.
//!
//! A [`Grid`] is a fixed-size, column-major array of cells. This crate
//! provides copying, comparison, density queries, symmetry transforms and
//! random seeding. The generational step, LED mapping and fading live with
//! the firmware driver and only consume these grids.

pub mod arduino;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod random;
pub mod symmetry;

pub use arduino::ArduinoRandom;
pub use config::{LedGrid, LifeConfig};
pub use error::GridError;
pub use grid::{ALIVE, Cell, DEAD, Grid, NONTRIVIAL_THRESHOLD};
pub use random::{CellRng, random_cell_count_range};
pub use symmetry::{SYMMETRY_ROLL_RANGE, Symmetry};
