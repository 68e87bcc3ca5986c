// ui.rs - egui rendering and input for the desktop front end

use std::time::Instant;

use eframe::egui;
use egui::{Rect, Vec2};
use life::patterns::PATTERNS;

use crate::app::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous play: one generation per elapsed delay
        self.poll(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                if ui.button("Next Generation").clicked() {
                    self.next_generation();
                }

                if ui.button("Randomize").clicked() {
                    self.randomize();
                }

                if ui.button("Clear").clicked() {
                    self.clear();
                }

                let run_text = if self.session.is_running() { "Stop" } else { "Start" };
                if ui.button(run_text).clicked() {
                    self.toggle_running();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            ui.horizontal(|ui| {
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

                let mut stop_on_cycle = self.session.stop_on_cycle();
                if ui.checkbox(&mut stop_on_cycle, "Stop on repeat").changed() {
                    self.session.set_stop_on_cycle(stop_on_cycle);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Delay:");
                ui.add(egui::Slider::new(&mut self.config.delay_ms, 0..=1000).suffix(" ms"));

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            if let Some(status) = &self.status {
                ui.label(status.as_str());
            }

            ui.separator();

            // Board
            let cell = self.cell_size();
            let [board_w, board_h] = self.board_size();
            let (response, painter) =
                ui.allocate_painter(Vec2::new(board_w, board_h), egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for (row, col, alive) in self.session.grid().iter_cells() {
                if !alive {
                    continue;
                }
                let rect = Rect::from_min_size(
                    egui::pos2(origin.x + col as f32 * cell, origin.y + row as f32 * cell),
                    Vec2::splat(cell),
                );
                painter.rect_filled(rect, 0.0, self.live_color);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    self.click(pos.x - origin.x, pos.y - origin.y);
                }
            }

            ui.separator();

            let grid = self.session.grid();
            let total = grid.height() * grid.width();
            let live = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
        });

        // Keep frames coming while running
        if self.session.is_running() {
            ctx.request_repaint_after(self.delay());
        }
    }
}
