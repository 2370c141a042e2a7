// main.rs - Desktop preview of the LED matrix grid model

use eframe::egui;
use egui::Color32;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

use led_grid::config::{self, LedGrid};
use led_grid::patterns;
use led_grid::{ArduinoRandom, Symmetry};

mod ui;

fn main() -> Result<(), eframe::Error> {
    if let Err(e) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("Unable to install logger: {}", e);
    }
    info!("Starting grid preview v{} ...", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LED Grid Preview",
        options,
        Box::new(|_cc| Box::new(GridPreview::default())),
    )
}

pub struct GridPreview {
    pub grid: LedGrid,
    pub stash: LedGrid,             // Second grid for store/swap
    pub last_symmetry: Option<Symmetry>,
    pub is_shuffling: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub reseeds: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub use_arduino_rng: bool,
    pub seed: u32,

    arduino_rng: ArduinoRandom,
    std_rng: StdRng,
}

impl Default for GridPreview {
    fn default() -> Self {
        let seed = 1;
        Self {
            grid: LedGrid::empty(),
            stash: LedGrid::empty(),
            last_symmetry: None,
            is_shuffling: false,
            last_update: Instant::now(),
            update_interval: config::STEP_PERIOD,
            reseeds: 0,
            live_color: Color32::from_rgb(255, 140, 0),
            dead_color: Color32::from_rgb(30, 30, 30),
            selected_pattern: 0,
            use_arduino_rng: true,
            seed,
            arduino_rng: ArduinoRandom::with_seed(seed),
            std_rng: StdRng::seed_from_u64(u64::from(seed)),
        }
    }
}

/// Actions the UI can trigger on the preview.
pub trait GridPreviewInterface {
    fn reseed(&mut self);
    fn reset_rng(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_symmetry(&mut self, symmetry: Symmetry);
    fn store_grid(&mut self);
    fn swap_with_stash(&mut self);
    fn toggle_cell(&mut self, x: usize, y: usize);
}

impl GridPreviewInterface for GridPreview {
    fn reseed(&mut self) {
        let symmetry = if self.use_arduino_rng {
            self.grid.init_random_state(&mut self.arduino_rng)
        } else {
            self.grid.init_random_state(&mut self.std_rng)
        };
        self.last_symmetry = Some(symmetry);
        self.reseeds += 1;
        info!(
            "Reseed #{}: {} live cells, symmetry {}",
            self.reseeds,
            self.grid.count_nonzero_pixels(),
            symmetry
        );
    }

    fn reset_rng(&mut self) {
        self.arduino_rng = ArduinoRandom::with_seed(self.seed);
        self.std_rng = StdRng::seed_from_u64(u64::from(self.seed));
        self.reseeds = 0;
        info!("Random sources reset to seed {}", self.seed);
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.last_symmetry = None;
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.last_symmetry = None;
            info!("Loaded pattern {}", pattern.name);
        }
    }

    fn apply_symmetry(&mut self, symmetry: Symmetry) {
        match symmetry {
            Symmetry::Diag1 => self.grid.symmetrize_in_diag1(),
            Symmetry::Diag2 => self.grid.symmetrize_in_diag2(),
            other => self.grid.apply_symmetry(other),
        }
        info!("Applied symmetry {}", symmetry);
    }

    fn store_grid(&mut self) {
        self.stash.copy_from(&self.grid);
    }

    fn swap_with_stash(&mut self) {
        self.grid.swap_with(&mut self.stash);
    }

    fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.grid.toggle(x, y) {
            self.last_symmetry = None;
        }
    }
}
