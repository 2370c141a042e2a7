use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use led_grid::{ALIVE, ArduinoRandom, LedGrid, NONTRIVIAL_THRESHOLD, Symmetry};

/// 8x8 grids whose cells are alive with the given probability.
fn grid_with_density(density: f64) -> impl Strategy<Value = LedGrid> {
    let cell = prop::bool::weighted(density).prop_map(u8::from);
    prop::array::uniform8(prop::array::uniform8(cell)).prop_map(LedGrid::from_cells)
}

/// Any density, including mostly-empty grids.
fn any_led_grid() -> impl Strategy<Value = LedGrid> {
    prop_oneof![grid_with_density(0.02), grid_with_density(0.1), grid_with_density(0.5)]
}

proptest! {
    #[test]
    fn test_grid_identical_to_itself(g in any_led_grid()) {
        prop_assert!(g.is_identical_to(&g));
    }

    #[test]
    fn test_copy_makes_identical(a in any_led_grid(), b in any_led_grid()) {
        let mut b = b;
        let a0 = a;
        b.copy_from(&a);
        prop_assert!(a.is_identical_to(&b));
        prop_assert!(a.is_identical_to(&a0));
    }

    #[test]
    fn test_swap_exchanges(a0 in any_led_grid(), b0 in any_led_grid()) {
        let (mut a, mut b) = (a0, b0);
        a.swap_with(&mut b);
        prop_assert!(a.is_identical_to(&b0));
        prop_assert!(b.is_identical_to(&a0));
    }

    #[test]
    fn test_empty_iff_no_live_cells(g in any_led_grid()) {
        prop_assert_eq!(g.is_empty(), g.count_nonzero_pixels() == 0);
    }

    #[test]
    fn test_nontrivial_iff_count_above_threshold(g in any_led_grid()) {
        prop_assert_eq!(g.is_nontrivial(), g.count_nonzero_pixels() > NONTRIVIAL_THRESHOLD);
    }

    #[test]
    fn test_mirrors_are_idempotent(g in any_led_grid()) {
        let mut once = g;
        once.symmetrize_in_x();
        let mut twice = once;
        twice.symmetrize_in_x();
        prop_assert_eq!(once, twice);

        let mut once = g;
        once.symmetrize_in_y();
        let mut twice = once;
        twice.symmetrize_in_y();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_symmetrize_in_x_mirrors_columns(before in any_led_grid()) {
        let mut g = before;
        g.symmetrize_in_x();
        for y in 0..8 {
            for x in 0..4 {
                prop_assert_eq!(g[(x, y)], g[(7 - x, y)]);
                prop_assert_eq!(g[(x, y)], before[(x, y)]);
            }
        }
    }

    #[test]
    fn test_symmetrize_in_y_mirrors_rows(before in any_led_grid()) {
        let mut g = before;
        g.symmetrize_in_y();
        for x in 0..8 {
            for y in 0..4 {
                prop_assert_eq!(g[(x, y)], g[(x, 7 - y)]);
                prop_assert_eq!(g[(x, y)], before[(x, y)]);
            }
        }
    }

    #[test]
    fn test_symmetrize_in_diag1(before in any_led_grid()) {
        let mut g = before;
        g.symmetrize_in_diag1();
        for x in 0..8 {
            for y in 0..8 {
                prop_assert_eq!(g[(x, y)], g[(y, x)]);
                if y >= x {
                    prop_assert_eq!(g[(x, y)], before[(x, y)]);
                }
            }
        }
    }

    #[test]
    fn test_symmetrize_in_diag2(before in any_led_grid()) {
        let mut g = before;
        g.symmetrize_in_diag2();
        for x in 0..8 {
            for y in 0..8 {
                prop_assert_eq!(g[(x, y)], g[(y, x)]);
                if y <= x {
                    prop_assert_eq!(g[(x, y)], before[(x, y)]);
                }
            }
        }
    }

    #[test]
    fn test_random_state_bounds(seed in any::<u64>(), g in any_led_grid()) {
        let mut g = g;
        let symmetry = g.init_random_state(&mut StdRng::seed_from_u64(seed));
        let nnz = g.count_nonzero_pixels();
        prop_assert!(g.cells().iter().flatten().all(|&c| c <= ALIVE));
        if symmetry == Symmetry::None {
            prop_assert!(nnz > 0 && nnz < 32);
        }
    }

    #[test]
    fn test_arduino_random_state_bounds(seed in any::<u32>()) {
        let mut g = LedGrid::empty();
        let symmetry = g.init_random_state(&mut ArduinoRandom::with_seed(seed));
        if symmetry == Symmetry::None {
            prop_assert!(g.count_nonzero_pixels() < 32);
        }
        prop_assert!(g.cells().iter().flatten().all(|&c| c <= ALIVE));
    }
}
