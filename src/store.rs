/*
 * Particle Store Module
 *
 * This module defines the double-buffered particle state. Two fixed-capacity
 * buffers ping-pong between the "current" (readable) and "next" (writable)
 * roles; a step counter's parity selects which is which. The buffers are
 * allocated once and reused, so advancing a generation never allocates.
 *
 * The split is what lets a step run in parallel without read/write hazards:
 * every lane reads the current generation and writes only its own slot in
 * the other buffer.
 */

use rand::Rng;

use crate::error::SimulationError;
use crate::particle::Particle;

#[derive(Debug)]
pub struct ParticleStore {
    buffers: [Vec<Particle>; 2],
    color_ids: Vec<usize>,
    num_colors: usize,
    step_count: u64,
}

impl ParticleStore {
    /// Build a store from explicit particles and color assignments.
    /// Color ids are validated here, once, rather than per-pair at runtime.
    pub fn new(
        particles: Vec<Particle>,
        color_ids: Vec<usize>,
        num_colors: usize,
    ) -> Result<Self, SimulationError> {
        if particles.len() != color_ids.len() {
            return Err(SimulationError::ColorCountMismatch {
                particles: particles.len(),
                colors: color_ids.len(),
            });
        }
        for (index, &color_id) in color_ids.iter().enumerate() {
            if color_id >= num_colors {
                return Err(SimulationError::ColorIdOutOfRange {
                    index,
                    color_id,
                    num_colors,
                });
            }
        }
        let other = particles.clone();
        Ok(Self {
            buffers: [particles, other],
            color_ids,
            num_colors,
            step_count: 0,
        })
    }

    // Spawn particles at random positions with random colors, all at rest
    pub fn spawn(num_particles: usize, num_colors: usize, width: f32, height: f32) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..num_particles)
            .map(|_| Particle::random(width, height, &mut rng))
            .collect();
        let color_ids = (0..num_particles)
            .map(|_| rng.gen_range(0..num_colors))
            .collect();
        // Generated ids are in range by construction
        Self::new(particles, color_ids, num_colors)
            .expect("generated color ids are always in range")
    }

    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers[0].is_empty()
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    pub fn color_ids(&self) -> &[usize] {
        &self.color_ids
    }

    /// The readable generation: the buffer most recently written.
    pub fn current(&self) -> &[Particle] {
        &self.buffers[(self.step_count % 2) as usize]
    }

    /// Advance one generation. The writer reads the current buffer and the
    /// color ids, and fills the other buffer; afterwards the parity flips so
    /// the buffer just written becomes `current()`.
    pub fn advance<F>(&mut self, writer: F)
    where
        F: FnOnce(&[Particle], &[usize], &mut [Particle]),
    {
        let (front, back) = self.buffers.split_at_mut(1);
        let (current, next) = if self.step_count % 2 == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        writer(current.as_slice(), &self.color_ids, next.as_mut_slice());
        self.step_count += 1;
    }

    /// Number of generations advanced so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
