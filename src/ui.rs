/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters
 * and a grid editor for the per-color force table, mirroring the affinity
 * menu of the original toy: edit cells locally, then apply the whole table
 * at once so the simulation only ever swaps in a complete matrix.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::force_table::ForceTable;
use crate::params::SimulationParams;
use crate::particle::color_for;

// What the user asked for this frame
#[derive(Default)]
pub struct UiActions {
    pub reset_particles: bool,
    pub apply_table: bool,
    pub randomize_table: bool,
    pub world_changed: bool,
    pub ui_changed: bool,
}

// Update the UI and report the requested actions. `table_editor` is the
// local working copy of the force table; it only reaches the simulation
// when the user applies it.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    table_editor: &mut ForceTable,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Number of Particles"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.num_colors,
                        SimulationParams::get_num_colors_range(),
                    )
                    .text("Number of Colors"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.point_size,
                        SimulationParams::get_point_size_range(),
                    )
                    .text("Point Size"),
                );

                if ui.button("Reset Particles").clicked() {
                    actions.reset_particles = true;
                }
            });

            ui.collapsing("Force Table", |ui| {
                force_table_grid(ui, table_editor);

                ui.horizontal(|ui| {
                    if ui.button("Apply Forces").clicked() {
                        actions.apply_table = true;
                    }
                    if ui.button("Randomize").clicked() {
                        actions.randomize_table = true;
                    }
                });
            });

            ui.checkbox(&mut params.enable_parallel, "Parallel Update");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            if params.show_debug {
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!(
                    "Step time: {:.2} ms",
                    debug_info.step_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Steps: {}", debug_info.steps));
            }
        });

    let (world_changed, ui_changed) = params.detect_changes();
    actions.world_changed = world_changed;
    actions.ui_changed = ui_changed;
    actions
}

// Draw the C x C affinity editor. Row color is the color that feels the
// force, column color is the color it reacts to.
fn force_table_grid(ui: &mut egui::Ui, table: &mut ForceTable) {
    let num_colors = table.num_colors();

    egui::Grid::new("force_table_grid")
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            for b in 0..num_colors {
                ui.colored_label(swatch(b), format!("C{}", b));
            }
            ui.end_row();

            for a in 0..num_colors {
                ui.colored_label(swatch(a), format!("C{}", a));
                for b in 0..num_colors {
                    ui.add(egui::DragValue::new(table.get_mut(a, b)).speed(0.1));
                }
                ui.end_row();
            }
        });
}

fn swatch(color_id: usize) -> egui::Color32 {
    let c: Rgb<u8> = color_for(color_id);
    egui::Color32::from_rgb(c.red, c.green, c.blue)
}
