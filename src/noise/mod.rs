//! Fractal noise built on the cellular evaluator.
//!
//! Octaves are evaluated with the four-lane kernel from [`crate::voronoi`];
//! [`NoiseSettings`] bundles everything needed to reproduce a field.

mod fractal;
mod settings;

pub use fractal::{FractalNoiseConfig, sample_fractal_voronoi, sample_fractal_voronoi_batch, MAX_FREQUENCY};
pub use settings::NoiseSettings;
