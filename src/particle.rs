/*
 * Particle Module
 *
 * This module defines the Particle struct and the render palette. A particle
 * is only position and velocity; its color id lives in a parallel array in
 * the particle store and never changes after creation.
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    // Spawn at a random position inside the world bounds, at rest
    pub fn random(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height);
        Self::new(pt2(x, y))
    }
}

// Render palette indexed by color id, cycled when more colors are configured
// than there are entries
const PALETTE: [(u8, u8, u8); 10] = [
    (76, 217, 100),  // Green
    (255, 59, 48),   // Red
    (175, 82, 222),  // Purple
    (255, 204, 0),   // Yellow
    (90, 200, 250),  // Cyan
    (255, 149, 0),   // Orange
    (88, 86, 214),   // Indigo
    (255, 45, 85),   // Pink
    (52, 170, 220),  // Blue
    (220, 220, 220), // White
];

pub fn color_for(color_id: usize) -> Rgb<u8> {
    let (r, g, b) = PALETTE[color_id % PALETTE.len()];
    rgb(r, g, b)
}
