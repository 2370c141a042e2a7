// arduino.rs - The AVR libc random() generator
//
// Seeding a grid with this reproduces what the board does for the same
// seed, which makes it possible to replay a board's patterns on a desktop.

use crate::random::CellRng;

const DEFAULT_STATE: i64 = 1;
const ZERO_STATE_REPLACEMENT: i64 = 123_459_876;
const MULTIPLIER: i64 = 16_807;
const QUOTIENT: i64 = 127_773; // 0x7fffffff / MULTIPLIER
const REMAINDER: i64 = 2_836; // 0x7fffffff % MULTIPLIER
const MODULUS: i64 = 0x7fff_ffff;

/// Park-Miller "minimal standard" generator, computed with Schrage's method
/// exactly like the AVR C library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArduinoRandom {
    next: i64,
}

impl Default for ArduinoRandom {
    fn default() -> Self {
        Self { next: DEFAULT_STATE }
    }
}

impl ArduinoRandom {
    /// Creates a generator in the same state as `randomSeed(seed)` after reset.
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Self::default();
        rng.random_seed(seed);
        rng
    }

    /// `randomSeed()`: a zero seed leaves the state unchanged.
    pub fn random_seed(&mut self, seed: u32) {
        if seed > 0 {
            self.next = i64::from(seed);
        }
    }

    /// Next raw value in `[1, 0x7fffffff)`.
    pub fn next_raw(&mut self) -> u32 {
        let mut x = self.next;
        if x == 0 {
            x = ZERO_STATE_REPLACEMENT;
        }
        let hi = x / QUOTIENT;
        let lo = x % QUOTIENT;
        x = MULTIPLIER * lo - REMAINDER * hi;
        if x < 0 {
            x += MODULUS;
        }
        self.next = x;
        x as u32
    }

    /// `random(max)`: a value in `[0, max)`, or `0` if `max` is zero.
    pub fn random(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_raw() % max
    }
}

/// `random(min, max)`. Uses plain modulo like the board, so the slight bias
/// toward small values is reproduced too.
impl CellRng for ArduinoRandom {
    fn random_between(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        min + self.next_raw() as usize % (max - min)
    }
}
