/*
 * Particle Life Simulation - Module Definitions
 *
 * This file defines the module structure for the particle-life application.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use error::SimulationError;
pub use force_table::ForceTable;
pub use particle::Particle;
pub use store::ParticleStore;
pub use simulation::SimulationConfig;
pub use scheduler::FrameScheduler;
pub use params::SimulationParams;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod error;
pub mod force_table;
pub mod force;
pub mod particle;
pub mod store;
pub mod simulation;
pub mod scheduler;
pub mod params;
pub mod debug;
pub mod app;
pub mod ui;

// Force-law constants. These are tuned values; changing them changes the
// emergent behavior of the simulation, not just its performance.

// Pairs closer than this contribute no force (covers self-pairs at distance 0)
pub const MIN_INTERACTION_DISTANCE: f32 = 1.0;
// The near zone (universal repulsion) ends at point_size * NEAR_RANGE_FACTOR
pub const NEAR_RANGE_FACTOR: f32 = 10.0;
// No force at all beyond point_size * FAR_RANGE_FACTOR
pub const FAR_RANGE_FACTOR: f32 = 20.0;
// Scales accumulated force into the velocity integration
pub const FORCE_SCALE: f32 = 100.0;
// Per-step velocity damping
pub const VELOCITY_DAMPING: f32 = 0.99;

// Upper bound on distinct particle colors
pub const MAX_COLORS: usize = 20;
