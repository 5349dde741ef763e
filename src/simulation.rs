/*
 * Simulation Step Module
 *
 * This module computes one generation of the particle-life simulation: an
 * all-pairs O(n^2) force accumulation followed by integration and toroidal
 * wrapping. Each particle's update depends only on the current generation,
 * so the per-particle work is embarrassingly parallel and is dispatched
 * over disjoint chunks of the output buffer with rayon.
 *
 * Optimized for performance by:
 * - Reading positions/velocities from a shared immutable buffer
 * - Writing each particle only to its own slot in the output buffer
 * - Chunked parallel iteration to reduce synchronization overhead
 */

use nannou::prelude::*;
use rayon::prelude::*;

use crate::force::force_magnitude;
use crate::force_table::ForceTable;
use crate::particle::Particle;
use crate::{FORCE_SCALE, MIN_INTERACTION_DISTANCE, VELOCITY_DAMPING};

// Per-frame simulation inputs: world bounds (toroidal), the particle size
// that doubles as the force-falloff length scale, and the elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    pub point_size: f32,
    pub delta_time: f32,
}

/// Compute the next generation from the current one. Deterministic for a
/// given (current, color_ids, table, cfg); `next` is overwritten slot by
/// slot and is never read.
pub fn step(
    current: &[Particle],
    color_ids: &[usize],
    table: &ForceTable,
    cfg: &SimulationConfig,
    next: &mut [Particle],
    parallel: bool,
) {
    if current.is_empty() {
        return;
    }
    debug_assert_eq!(current.len(), next.len());
    debug_assert_eq!(current.len(), color_ids.len());

    if parallel {
        let chunk_size = std::cmp::max(current.len() / rayon::current_num_threads(), 1);
        next.par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let offset = chunk_idx * chunk_size;
                for (i_in_chunk, slot) in chunk.iter_mut().enumerate() {
                    *slot = advance_particle(offset + i_in_chunk, current, color_ids, table, cfg);
                }
            });
    } else {
        for (i, slot) in next.iter_mut().enumerate() {
            *slot = advance_particle(i, current, color_ids, table, cfg);
        }
    }
}

// Accumulate the pairwise forces on particle i and integrate its state
fn advance_particle(
    i: usize,
    current: &[Particle],
    color_ids: &[usize],
    table: &ForceTable,
    cfg: &SimulationConfig,
) -> Particle {
    let particle = current[i];
    let color_id = color_ids[i];
    let mut force = Vec2::ZERO;

    for (j, other) in current.iter().enumerate() {
        if j == i {
            continue;
        }

        let diff = other.position - particle.position;
        let dist = diff.length();
        if dist < MIN_INTERACTION_DISTANCE {
            continue;
        }

        // Positive magnitude pulls i toward j, negative pushes away
        let direction = diff / dist;
        force += direction * force_magnitude(dist, color_id, color_ids[j], table, cfg.point_size);
    }

    let velocity = (particle.velocity + force * cfg.delta_time * FORCE_SCALE) * VELOCITY_DAMPING;
    let position = pt2(
        wrap(particle.position.x + velocity.x * cfg.delta_time, cfg.width),
        wrap(particle.position.y + velocity.y * cfg.delta_time, cfg.height),
    );

    Particle { position, velocity }
}

// Toroidal wrap into [0, bound): exiting one edge re-enters the opposite one
#[inline]
pub fn wrap(value: f32, bound: f32) -> f32 {
    value.rem_euclid(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: f32, height: f32, point_size: f32, delta_time: f32) -> SimulationConfig {
        SimulationConfig {
            width,
            height,
            point_size,
            delta_time,
        }
    }

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
        }
    }

    #[test]
    fn empty_world_is_a_noop() {
        let table = ForceTable::zeros(1);
        let cfg = config(100.0, 100.0, 5.0, 0.016);
        let mut next: Vec<Particle> = Vec::new();
        step(&[], &[], &table, &cfg, &mut next, false);
        assert!(next.is_empty());
    }

    #[test]
    fn single_particle_feels_no_force() {
        let table = ForceTable::ring(2);
        let cfg = config(100.0, 100.0, 5.0, 1.0);
        let current = [particle(50.0, 50.0, 2.0, 0.0)];
        let mut next = current;
        step(&current, &[0], &table, &cfg, &mut next, false);

        // Only damping acts on the velocity
        assert!((next[0].velocity.x - 2.0 * VELOCITY_DAMPING).abs() < 1e-6);
        assert_eq!(next[0].velocity.y, 0.0);
        assert!((next[0].position.x - (50.0 + 2.0 * VELOCITY_DAMPING)).abs() < 1e-5);
    }

    #[test]
    fn wrap_keeps_positions_in_bounds() {
        let w = 128.0;
        // A particle at W - 0.5 moving +10 over one second re-enters at 9.5
        assert!((wrap(w - 0.5 + 10.0, w) - 9.5).abs() < 1e-5);
        assert!((wrap(-3.0, w) - 125.0).abs() < 1e-5);
        assert_eq!(wrap(0.0, w), 0.0);
    }

    #[test]
    fn zero_table_gives_straight_line_damped_motion() {
        let table = ForceTable::zeros(3);
        let cfg = config(1000.0, 1000.0, 5.0, 0.5);
        let mut current = vec![
            particle(10.0, 10.0, 8.0, -4.0),
            particle(500.0, 500.0, -1.0, 1.0),
        ];
        let color_ids = [0, 2];
        let mut next = current.clone();

        let initial_speed = current[0].velocity.length();
        let mut speed = initial_speed;
        for _ in 0..50 {
            step(&current, &color_ids, &table, &cfg, &mut next, false);
            std::mem::swap(&mut current, &mut next);

            // Velocity magnitude strictly decreases toward zero
            let new_speed = current[0].velocity.length();
            assert!(new_speed < speed);
            speed = new_speed;

            assert!((0.0..1000.0).contains(&current[0].position.x));
            assert!((0.0..1000.0).contains(&current[0].position.y));
        }
        assert!((speed - initial_speed * VELOCITY_DAMPING.powi(50)).abs() < 1e-3);
    }

    #[test]
    fn self_repelling_pair_pushes_apart() {
        // Two same-colored particles 5 apart with a +1.0 self-affinity fall
        // in the near zone (near = 10), where the falloff is -0.5
        let mut table = ForceTable::zeros(1);
        table.set(0, 0, 1.0);
        let cfg = config(1000.0, 1000.0, 1.0, 1.0);
        let current = [particle(0.0, 0.0, 0.0, 0.0), particle(5.0, 0.0, 0.0, 0.0)];
        let mut next = current;

        step(&current, &[0, 0], &table, &cfg, &mut next, false);

        assert!(next[0].velocity.x < 0.0);
        assert!(next[1].velocity.x > 0.0);
        assert_eq!(next[0].velocity.y, 0.0);
        assert_eq!(next[1].velocity.y, 0.0);
        // Force magnitude is 0.5 toward -x for the left particle
        let expected = -0.5 * FORCE_SCALE * VELOCITY_DAMPING;
        assert!((next[0].velocity.x - expected).abs() < 1e-3);
    }

    #[test]
    fn overlapping_particles_produce_no_force() {
        let mut table = ForceTable::zeros(1);
        table.set(0, 0, 1.0);
        let cfg = config(100.0, 100.0, 5.0, 1.0);
        let current = [particle(50.0, 50.0, 0.0, 0.0), particle(50.2, 50.0, 0.0, 0.0)];
        let mut next = current;
        step(&current, &[0, 0], &table, &cfg, &mut next, false);
        assert_eq!(next[0].velocity, Vec2::ZERO);
        assert_eq!(next[1].velocity, Vec2::ZERO);
    }

    #[test]
    fn step_is_deterministic_across_buffers_and_parallelism() {
        let table = ForceTable::ring(4);
        let cfg = config(640.0, 480.0, 4.0, 0.016);
        let mut rng_state = 1u64;
        // Small deterministic pseudo-random layout
        let mut rand = move || {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng_state >> 33) as f32 / u32::MAX as f32) * 400.0
        };
        let current: Vec<Particle> = (0..64).map(|_| particle(rand(), rand(), 0.0, 0.0)).collect();
        let color_ids: Vec<usize> = (0..64).map(|i| i % 4).collect();

        let mut first = current.clone();
        let mut second = current.clone();
        let mut parallel_out = current.clone();
        step(&current, &color_ids, &table, &cfg, &mut first, false);
        step(&current, &color_ids, &table, &cfg, &mut second, false);
        step(&current, &color_ids, &table, &cfg, &mut parallel_out, true);

        assert_eq!(first, second);
        assert_eq!(first, parallel_out);
    }
}
