/*
 * Force Table Module
 *
 * This module defines the ForceTable struct, a square matrix of signed
 * coefficients indexed by (color_a, color_b). Entry (a, b) is the affinity
 * particles of color a feel toward particles of color b; the matrix does
 * not have to be symmetric. The table can be edited in the UI and swapped
 * in wholesale between simulation steps.
 */

use rand::Rng;

use crate::error::SimulationError;

#[derive(Debug, Clone, PartialEq)]
pub struct ForceTable {
    values: Vec<f32>,
    num_colors: usize,
}

impl ForceTable {
    // Create a table with every coefficient set to zero
    pub fn zeros(num_colors: usize) -> Self {
        Self {
            values: vec![0.0; num_colors * num_colors],
            num_colors,
        }
    }

    // Default table: each color chases its successor in a ring.
    // Color k pulls on color (k+1 mod C) with -2.0, the successor feels
    // +1.0 back toward k, and every color repels its own kind with +1.0.
    pub fn ring(num_colors: usize) -> Self {
        let mut table = Self::zeros(num_colors);
        for k in 0..num_colors {
            let next = (k + 1) % num_colors;
            table.set(k, next, -2.0);
            table.set(next, k, 1.0);
            // The self-entry goes last so the C = 1 case degenerates cleanly
            table.set(k, k, 1.0);
        }
        table
    }

    // Fill every entry with a uniform random coefficient in [-1, 1)
    pub fn randomized(num_colors: usize) -> Self {
        let mut rng = rand::thread_rng();
        let mut table = Self::zeros(num_colors);
        for value in &mut table.values {
            *value = rng.gen_range(-1.0..1.0);
        }
        table
    }

    // Build a table from row-major data, rejecting anything that is not
    // an exact num_colors x num_colors matrix
    pub fn from_rows(rows: &[Vec<f32>], num_colors: usize) -> Result<Self, SimulationError> {
        if rows.len() != num_colors || rows.iter().any(|row| row.len() != num_colors) {
            return Err(SimulationError::TableSizeMismatch {
                expected: num_colors,
                found: rows.len(),
            });
        }
        let mut table = Self::zeros(num_colors);
        for (a, row) in rows.iter().enumerate() {
            for (b, &value) in row.iter().enumerate() {
                table.set(a, b, value);
            }
        }
        Ok(table)
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    #[inline]
    pub fn get(&self, color_a: usize, color_b: usize) -> f32 {
        self.values[color_a * self.num_colors + color_b]
    }

    pub fn set(&mut self, color_a: usize, color_b: usize, value: f32) {
        self.values[color_a * self.num_colors + color_b] = value;
    }

    // Mutable cell access for the UI editor grid
    pub fn get_mut(&mut self, color_a: usize, color_b: usize) -> &mut f32 {
        &mut self.values[color_a * self.num_colors + color_b]
    }
}
