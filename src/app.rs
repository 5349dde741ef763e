/*
 * Application Module
 *
 * This module defines the main application model and logic for the
 * particle-life simulation. It wires the frame scheduler to nannou's
 * update loop, forwards UI actions (reset, force table edits) to the
 * scheduler between steps, and renders the current particle generation.
 *
 * World coordinates live in [0, width) x [0, height) with toroidal wrap;
 * the view maps them into nannou's centered screen space.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::Instant;

use crate::debug::DebugInfo;
use crate::force_table::ForceTable;
use crate::params::SimulationParams;
use crate::particle::color_for;
use crate::scheduler::FrameScheduler;
use crate::ui;

// Main model for the application
pub struct Model {
    pub scheduler: FrameScheduler,
    pub params: SimulationParams,
    pub table_editor: ForceTable,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Particle Life Simulation")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the scheduler with the default ring force table
    let scheduler = FrameScheduler::new(
        params.num_particles,
        params.num_colors,
        window_width,
        window_height,
        params.point_size,
    );

    // The editor starts from the active table
    let table_editor = scheduler.table().clone();

    Model {
        scheduler,
        params,
        table_editor,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and collect the requested actions
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.table_editor,
        &model.debug_info,
    );

    if actions.randomize_table {
        model.table_editor = ForceTable::randomized(model.params.num_colors);
    }

    // Handle respawns: an explicit reset, or a particle/color count change.
    // A color count change invalidates the table dimensions, so both the
    // active table and the editor are rebuilt.
    if actions.reset_particles || actions.world_changed {
        reset_simulation(app, model);
    } else if actions.apply_table {
        // The editor always matches the active color count here, but go
        // through the validated path anyway
        if let Err(err) = model.scheduler.submit_table(model.table_editor.clone()) {
            eprintln!("rejected force table: {}", err);
        }
    }

    // Track the window and the point size slider
    let window_rect = app.window_rect();
    model.scheduler.set_bounds(window_rect.w(), window_rect.h());
    model.scheduler.set_point_size(model.params.point_size);

    // Only advance the simulation if it is not paused
    if !model.params.pause_simulation {
        let step_start = Instant::now();
        model
            .scheduler
            .tick(update.since_last, model.params.enable_parallel);
        model.debug_info.step_time = step_start.elapsed();
        model.debug_info.steps = model.scheduler.step_count();
    }
}

// Respawn particles and rebuild the force table for the current params
fn reset_simulation(app: &App, model: &mut Model) {
    let window_rect = app.window_rect();
    model.scheduler = FrameScheduler::new(
        model.params.num_particles,
        model.params.num_colors,
        window_rect.w(),
        window_rect.h(),
        model.params.point_size,
    );
    model.table_editor = model.scheduler.table().clone();
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let half_w = window_rect.w() / 2.0;
    let half_h = window_rect.h() / 2.0;

    // Draw each particle from the current generation
    let point_size = model.scheduler.point_size();
    let color_ids = model.scheduler.color_ids();
    for (particle, &color_id) in model.scheduler.particles().iter().zip(color_ids) {
        // Map world space [0, w) x [0, h) to nannou's centered coordinates
        draw.ellipse()
            .x_y(particle.position.x - half_w, particle.position.y - half_h)
            .radius(point_size)
            .color(color_for(color_id));
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
