// ui.rs - Controls, grid painting and click handling

use eframe::egui;
use egui::{Color32, Stroke};

use life_core::PATTERNS;

use crate::app::{LifeApp, MAX_SPEED, MIN_SPEED};
use crate::layout::GridLayout;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever the timer fired since the last frame
        self.pump_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let running = self.controller.is_running();
                let button_text = if running { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.button("⏹ Reset").clicked() {
                    self.reset();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.controller.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.speed();
                let slider = egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                    .logarithmic(true)
                    .suffix(" gen/sec");
                if ui.add(slider).changed() {
                    self.set_speed(speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            if self.controller.is_running() {
                ui.label("Running. Pause to edit cells.");
            } else {
                ui.label("Click cells to toggle them alive/dead. Use Play/Pause to run the simulation.");
            }

            ui.separator();

            let grid = self.controller.grid();
            let layout = GridLayout {
                origin: ui.cursor().min,
                cell_size: self.config.display.cell_size,
                spacing: self.config.display.spacing,
                rows: grid.rows(),
                cols: grid.cols(),
            };

            let (response, painter) = ui.allocate_painter(layout.size(), egui::Sense::click());

            // Gutter color shows between cells
            painter.rect_filled(layout.bounds(), 0.0, self.line_color);

            let border = Stroke::new(0.2, Color32::from_gray(60));
            for (row, col, cell) in grid.iter() {
                let rect = layout.cell_rect(row, col);
                let cell_color = if cell.is_alive() {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 0.0, cell_color);
                painter.rect_stroke(rect, 0.0, border);
            }

            // The controller ignores clicks while running
            if response.clicked() {
                if let Some((row, col)) = response
                    .interact_pointer_pos()
                    .and_then(|pos| layout.cell_at(pos))
                {
                    self.click_cell(row, col);
                }
            }

            ui.separator();

            // Statistics
            let total = layout.rows * layout.cols;
            let live = self.controller.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
                match self.controller.cycle_period() {
                    Some(1) => {
                        ui.label("Stable");
                    }
                    Some(period) => {
                        ui.label(format!("Oscillating (period {period})"));
                    }
                    None => {}
                }
            });
        });
    }
}
