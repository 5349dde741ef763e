/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle-life simulation. These parameters
 * can be modified through the UI. It also provides methods for parameter
 * change detection and management to improve separation of concerns.
 */

use crate::MAX_COLORS;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub num_colors: usize,
    pub point_size: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,
    // Performance settings
    pub enable_parallel: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    num_colors: usize,
    point_size: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 1000,
            num_colors: 4,
            point_size: 5.0,
            show_debug: false,
            pause_simulation: false,
            // Parallel all-pairs update is the practical default for n >= ~1000
            enable_parallel: true,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            num_colors: self.num_colors,
            point_size: self.point_size,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (world_changed, any_ui_changed): a world change
    // (particle count or color count) requires respawning the simulation
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut world_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.num_particles != prev.num_particles || self.num_colors != prev.num_colors {
                world_changed = true;
                ui_changed = true;
            }

            if self.point_size != prev.point_size
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (world_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        10..=10000
    }

    pub fn get_num_colors_range() -> std::ops::RangeInclusive<usize> {
        1..=MAX_COLORS
    }

    pub fn get_point_size_range() -> std::ops::RangeInclusive<f32> {
        1.0..=20.0
    }
}
