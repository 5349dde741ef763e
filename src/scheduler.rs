/*
 * Frame Scheduler Module
 *
 * This module drives the simulation from the application's animation ticks.
 * Each tick converts the elapsed wall-clock time into the step's delta time,
 * applies any force table submitted since the last step, and advances the
 * particle store by one generation.
 *
 * Table replacements are staged in a pending slot so that a step in flight
 * always observes one consistent table snapshot; the swap happens strictly
 * between steps. Cancelling the scheduler turns further ticks into no-ops.
 */

use std::time::Duration;

use crate::error::SimulationError;
use crate::force_table::ForceTable;
use crate::particle::Particle;
use crate::simulation::{step, SimulationConfig};
use crate::store::ParticleStore;

pub struct FrameScheduler {
    store: ParticleStore,
    table: ForceTable,
    pending_table: Option<ForceTable>,
    width: f32,
    height: f32,
    point_size: f32,
    cancelled: bool,
}

impl FrameScheduler {
    /// Create a scheduler with freshly spawned particles and the default
    /// ring force table.
    pub fn new(
        num_particles: usize,
        num_colors: usize,
        width: f32,
        height: f32,
        point_size: f32,
    ) -> Self {
        Self::with_store(
            ParticleStore::spawn(num_particles, num_colors, width, height),
            ForceTable::ring(num_colors),
            width,
            height,
            point_size,
        )
    }

    pub fn with_store(
        store: ParticleStore,
        table: ForceTable,
        width: f32,
        height: f32,
        point_size: f32,
    ) -> Self {
        Self {
            store,
            table,
            pending_table: None,
            width,
            height,
            point_size,
            cancelled: false,
        }
    }

    /// Advance one generation with the elapsed wall-clock time since the
    /// previous tick. Does nothing once cancelled.
    pub fn tick(&mut self, elapsed: Duration, parallel: bool) {
        if self.cancelled {
            return;
        }

        // A submitted table takes effect from this step onward, never mid-step
        if let Some(table) = self.pending_table.take() {
            self.table = table;
        }

        let cfg = SimulationConfig {
            width: self.width,
            height: self.height,
            point_size: self.point_size,
            delta_time: elapsed.as_secs_f32(),
        };
        let table = &self.table;
        self.store.advance(|current, color_ids, next| {
            step(current, color_ids, table, &cfg, next, parallel);
        });
    }

    /// Stage a wholesale force table replacement for the next step.
    /// Tables of the wrong dimension are rejected at this boundary.
    pub fn submit_table(&mut self, table: ForceTable) -> Result<(), SimulationError> {
        if table.num_colors() != self.store.num_colors() {
            return Err(SimulationError::TableSizeMismatch {
                expected: self.store.num_colors(),
                found: table.num_colors(),
            });
        }
        self.pending_table = Some(table);
        Ok(())
    }

    /// Stop the scheduler; later ticks become no-ops.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled
    }

    // World bounds follow the window
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_point_size(&mut self, point_size: f32) {
        self.point_size = point_size;
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// The active table (pending replacements are not visible until applied).
    pub fn table(&self) -> &ForceTable {
        &self.table
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.current()
    }

    pub fn color_ids(&self) -> &[usize] {
        self.store.color_ids()
    }

    pub fn num_colors(&self) -> usize {
        self.store.num_colors()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn step_count(&self) -> u64 {
        self.store.step_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    fn scheduler_with_two_particles() -> FrameScheduler {
        let particles = vec![
            Particle::new(pt2(0.0, 0.0)),
            Particle::new(pt2(5.0, 0.0)),
        ];
        let store = ParticleStore::new(particles, vec![0, 0], 1).unwrap();
        let mut table = ForceTable::zeros(1);
        table.set(0, 0, 1.0);
        FrameScheduler::with_store(store, table, 1000.0, 1000.0, 1.0)
    }

    #[test]
    fn tick_advances_a_generation() {
        let mut scheduler = scheduler_with_two_particles();
        scheduler.tick(Duration::from_secs(1), false);
        assert_eq!(scheduler.step_count(), 1);
        // The self-repelling pair gained outward velocity
        assert!(scheduler.particles()[0].velocity.x < 0.0);
        assert!(scheduler.particles()[1].velocity.x > 0.0);
    }

    #[test]
    fn cancelled_scheduler_ignores_ticks() {
        let mut scheduler = scheduler_with_two_particles();
        scheduler.cancel();
        assert!(!scheduler.is_running());
        scheduler.tick(Duration::from_secs(1), false);
        assert_eq!(scheduler.step_count(), 0);
        assert_eq!(scheduler.particles()[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn submitted_table_applies_on_the_next_tick() {
        let mut scheduler = scheduler_with_two_particles();
        scheduler.submit_table(ForceTable::zeros(1)).unwrap();
        // Still the original table until a tick happens
        assert_eq!(scheduler.table().get(0, 0), 1.0);

        scheduler.tick(Duration::from_secs(1), false);
        assert_eq!(scheduler.table().get(0, 0), 0.0);
        // The zero table produced no force
        assert_eq!(scheduler.particles()[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn wrong_sized_table_is_rejected() {
        let mut scheduler = scheduler_with_two_particles();
        let err = scheduler.submit_table(ForceTable::zeros(3)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::TableSizeMismatch {
                expected: 1,
                found: 3
            }
        );
        // The active table is untouched
        scheduler.tick(Duration::from_secs(1), false);
        assert_eq!(scheduler.table().get(0, 0), 1.0);
    }
}
