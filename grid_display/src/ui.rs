// ui.rs - egui front end for the grid preview

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Instant;

use led_grid::config::{LED_COLS, LED_ROWS};
use led_grid::{Symmetry, patterns};

use crate::{GridPreview, GridPreviewInterface};

impl eframe::App for GridPreview {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Reseed once per step period while shuffling
        if self.is_shuffling && self.last_update.elapsed() >= self.update_interval {
            self.reseed();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{}x{} LED Grid", LED_COLS, LED_ROWS));

            ui.horizontal(|ui| {
                let button_text = if self.is_shuffling { "⏸ Stop" } else { "▶ Shuffle" };
                if ui.button(button_text).clicked() {
                    self.is_shuffling = !self.is_shuffling;
                    self.last_update = Instant::now();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_shuffling = false;
                    self.reseed();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_shuffling = false;
                    self.clear_grid();
                }

                ui.separator();

                ui.checkbox(&mut self.use_arduino_rng, "Arduino random()");
                ui.label("Seed:");
                if ui.add(egui::DragValue::new(&mut self.seed)).changed() {
                    self.reset_rng();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Mirror:");
                for symmetry in [Symmetry::X, Symmetry::Y, Symmetry::Diag1, Symmetry::Diag2] {
                    if ui.button(symmetry.name()).clicked() {
                        self.apply_symmetry(symmetry);
                    }
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply").clicked() {
                    self.is_shuffling = false;
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Store").clicked() {
                    self.store_grid();
                }
                if ui.button("Swap").clicked() {
                    self.swap_with_stash();
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            // Draw the matrix, x to the right and y down
            let box_size = 48.0;
            let spacing = 4.0;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * LED_COLS as f32 - spacing,
                (box_size + spacing) * LED_ROWS as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked_cell = None;
            for x in 0..LED_COLS {
                for y in 0..LED_ROWS {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + spacing),
                            start_pos.y + y as f32 * (box_size + spacing),
                        ),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if self.grid[(x, y)] != led_grid::DEAD {
                        self.live_color
                    } else {
                        self.dead_color
                    };
                    painter.rect_filled(rect, box_size / 2.0, cell_color);
                    painter.rect_stroke(rect, box_size / 2.0, Stroke::new(0.5, Color32::from_gray(60)));

                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                clicked_cell = Some((x, y));
                            }
                        }
                    }
                }
            }
            if let Some((x, y)) = clicked_cell {
                self.toggle_cell(x, y);
            }

            ui.separator();

            let live_cells = self.grid.count_nonzero_pixels();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Empty: {}", self.grid.is_empty()));
                ui.label(format!("Nontrivial: {}", self.grid.is_nontrivial()));
                ui.label(format!("Same as stash: {}", self.grid.is_identical_to(&self.stash)));
            });
            ui.horizontal(|ui| {
                let symmetry = self.last_symmetry.map_or("-", Symmetry::name);
                ui.label(format!("Last symmetry: {}", symmetry));
                ui.label(format!("Reseeds: {}", self.reseeds));
            });
        });

        if self.is_shuffling {
            ctx.request_repaint();
        }
    }
}
