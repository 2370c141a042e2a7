// config.rs - Compile-time board configuration

use std::time::Duration;

use crate::grid::Grid;

// Matrix size. Every grid in the firmware shares these dimensions.
pub const LED_COLS: usize = 8;
pub const LED_ROWS: usize = 8;

pub const LED_PIN: u8 = 13;
pub const CURRENT_LIMIT_MA: u32 = 1000;               // 0 - no limit
pub const BRIGHTNESS: u8 = 140;

// Roughly every other LED on the strip sits under a cell; depends on the wiring.
pub const NUM_LEDS: usize = (2 * LED_COLS - 1) * LED_COLS;

pub const HISTORY_LENGTH: usize = 256;

pub const STEP_PERIOD: Duration = Duration::from_millis(700);
// Should be 20-100 times smaller than STEP_PERIOD.
pub const EFFECT_PERIOD: Duration = Duration::from_millis(14);

// Lengths are counted in effect ticks out of STEP_PERIOD / EFFECT_PERIOD.
pub const FADE_TURN_ON_LENGTH: u8 = 15;
pub const FADE_TURN_ON_FLICKER_LENGTH: u8 = 0;
pub const FADE_TURN_OFF_LENGTH: u8 = 10;
pub const FADE_TO_BLACK_STEP: u8 = 8;

pub const BOUNDARY_CONDITION: BoundaryCondition = BoundaryCondition::Open;
pub const CHECKSUM: ChecksumKind = ChecksumKind::SimplifiedCrc32;

/// The grid size driven by the board.
pub type LedGrid = Grid<LED_COLS, LED_ROWS>;

/// Edge handling used by the generational step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// Cells beyond the edge are always dead.
    Open,
    /// The grid wraps around into a torus.
    Periodic,
}

/// Checksum used to fingerprint states in the history ring buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    /// Slow and relatively reliable.
    Crc32,
    /// Simplified CRC32.
    SimplifiedCrc32,
    /// Fast and not very reliable.
    Adler32,
}

/// All board settings in one immutable value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub cols: usize,
    pub rows: usize,
    pub led_pin: u8,
    pub current_limit_ma: u32,
    pub brightness: u8,
    pub num_leds: usize,
    pub boundary_condition: BoundaryCondition,
    pub checksum: ChecksumKind,
    pub history_length: usize,
    pub step_period: Duration,
    pub effect_period: Duration,
    pub fade_turn_on_length: u8,
    pub fade_turn_on_flicker_length: u8,
    pub fade_turn_off_length: u8,
    pub fade_to_black_step: u8,
}

impl LifeConfig {
    pub const DEFAULT: LifeConfig = LifeConfig {
        cols: LED_COLS,
        rows: LED_ROWS,
        led_pin: LED_PIN,
        current_limit_ma: CURRENT_LIMIT_MA,
        brightness: BRIGHTNESS,
        num_leds: NUM_LEDS,
        boundary_condition: BOUNDARY_CONDITION,
        checksum: CHECKSUM,
        history_length: HISTORY_LENGTH,
        step_period: STEP_PERIOD,
        effect_period: EFFECT_PERIOD,
        fade_turn_on_length: FADE_TURN_ON_LENGTH,
        fade_turn_on_flicker_length: FADE_TURN_ON_FLICKER_LENGTH,
        fade_turn_off_length: FADE_TURN_OFF_LENGTH,
        fade_to_black_step: FADE_TO_BLACK_STEP,
    };

    /// Whether the diagonal symmetries are available for this matrix.
    pub const fn is_square(&self) -> bool {
        self.cols == self.rows
    }

    /// Number of effect ticks that fit into one generation.
    pub fn effect_ticks_per_step(&self) -> u128 {
        self.step_period.as_millis() / self.effect_period.as_millis().max(1)
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
