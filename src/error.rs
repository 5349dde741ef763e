/*
 * Error Module
 *
 * This module defines the error type for the validations performed at the
 * simulation boundary. Invalid inputs are rejected when the particle store
 * or a replacement force table is constructed, never per-pair at runtime.
 */

use std::fmt;

/// Errors that can occur when constructing or reconfiguring the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A particle was assigned a color id outside [0, num_colors).
    ColorIdOutOfRange {
        index: usize,
        color_id: usize,
        num_colors: usize,
    },
    /// A force table does not match the simulation's color count.
    TableSizeMismatch { expected: usize, found: usize },
    /// The per-particle color array does not match the particle count.
    ColorCountMismatch { particles: usize, colors: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ColorIdOutOfRange {
                index,
                color_id,
                num_colors,
            } => write!(
                f,
                "particle {} has color id {} but only {} colors are configured",
                index, color_id, num_colors
            ),
            SimulationError::TableSizeMismatch { expected, found } => write!(
                f,
                "force table is {}x{} but the simulation has {} colors",
                found, found, expected
            ),
            SimulationError::ColorCountMismatch { particles, colors } => write!(
                f,
                "{} particles but {} color assignments",
                particles, colors
            ),
        }
    }
}

impl std::error::Error for SimulationError {}
