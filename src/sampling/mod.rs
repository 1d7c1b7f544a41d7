//! Parallel evaluation of noise over regular grids.

mod grid;

pub use grid::{NoiseField, sample_grid, grid_position, MAX_RESOLUTION};
