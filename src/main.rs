/*
 * Particle Life Simulation
 *
 * Thousands of colored particles move under pairwise forces determined by a
 * per-color-pair affinity table, producing emergent clustering and chasing
 * behavior. The force law combines universal short-range repulsion with a
 * color-dependent mid-range shell that vanishes at long range; positions
 * wrap toroidally at the window edges.
 *
 * The affinity table can be edited live from the UI and is applied to the
 * simulation as a whole between steps.
 */

use particle_life::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
