/*
 * Force Model Module
 *
 * This module defines the pairwise force law, a pure function of distance
 * and the two particles' colors. The law has two zones around each particle:
 *
 * 1. Near zone (distance < point_size * 10): the falloff ramps linearly
 *    from -1 at distance 0 up to 0, so any non-zero color pair repels at
 *    short range and clusters never collapse to a point.
 * 2. Mid zone (up to point_size * 20): the falloff rises quadratically
 *    from 0 to 1, giving a bounded attraction/repulsion shell whose sign
 *    comes from the color pair's table entry.
 *
 * Beyond the far boundary the force is exactly zero.
 */

use crate::force_table::ForceTable;
use crate::{FAR_RANGE_FACTOR, MIN_INTERACTION_DISTANCE, NEAR_RANGE_FACTOR};

/// Signed force magnitude between two particles at the given distance.
/// Positive pulls the first particle toward the second, negative pushes away.
#[inline]
pub fn force_magnitude(
    distance: f32,
    color_a: usize,
    color_b: usize,
    table: &ForceTable,
    point_size: f32,
) -> f32 {
    // Degenerate pairs (including a particle with itself) contribute nothing
    if distance < MIN_INTERACTION_DISTANCE {
        return 0.0;
    }

    let base = table.get(color_a, color_b);
    let near = point_size * NEAR_RANGE_FACTOR;
    let far = point_size * FAR_RANGE_FACTOR;

    let falloff = if distance < near {
        // Linear ramp from fully repulsive at distance 0 to neutral at `near`
        -1.0 + distance / near
    } else if distance < far {
        // Quadratic ramp from 0 at `near` to 1 at `far`
        let t = (distance - near) / near;
        t * t
    } else {
        0.0
    };

    base * falloff
}
