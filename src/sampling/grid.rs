//! Square grid sampling.

use glam::Vec3;
use rayon::prelude::*;
use tracing::debug;

use crate::error::NoiseError;
use crate::lanes::{Positions4, LANES};
use crate::noise::{sample_fractal_voronoi, NoiseSettings};

/// Largest accepted grid side length.
pub const MAX_RESOLUTION: u32 = 16384;

/// A sampled square field stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    /// Samples per side.
    pub resolution: u32,
    /// `resolution * resolution` values, row by row.
    pub values: Vec<f32>,
}

impl NoiseField {
    /// Value at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[(y * self.resolution + x) as usize]
    }

    /// Smallest and largest sample.
    pub fn value_range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

/// Position of grid sample `(x, y)`: the cell center in the unit square on
/// the z = 0 plane.
pub fn grid_position(x: u32, y: u32, resolution: u32) -> Vec3 {
    let inv = 1.0 / resolution as f32;
    Vec3::new((x as f32 + 0.5) * inv, (y as f32 + 0.5) * inv, 0.0)
}

/// Samples `settings` over a `resolution` x `resolution` grid.
///
/// Rows are processed in parallel; within a row samples are evaluated four at
/// a time. The result does not depend on the number of worker threads.
pub fn sample_grid(resolution: u32, settings: &NoiseSettings) -> Result<NoiseField, NoiseError> {
    if resolution == 0 || resolution > MAX_RESOLUTION {
        return Err(NoiseError::invalid(format!(
            "resolution must be between 1 and {MAX_RESOLUTION}, got {resolution}"
        )));
    }
    settings.validate()?;

    debug!(
        resolution,
        octaves = settings.noise.octaves,
        metric = %settings.voronoi.metric,
        function = %settings.voronoi.function,
        dimensions = %settings.voronoi.dimensions,
        "sampling grid"
    );

    let width = resolution as usize;
    let mut values = vec![0.0f32; width * width];

    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (batch_index, out) in row.chunks_mut(LANES).enumerate() {
                let x0 = (batch_index * LANES) as u32;
                let mut points = [Vec3::ZERO; LANES];
                for (lane, point) in points.iter_mut().enumerate().take(out.len()) {
                    *point = grid_position(x0 + lane as u32, y as u32, resolution);
                }
                let Some(batch) = Positions4::from_slice_padded(&points[..out.len()]) else {
                    continue;
                };
                let sampled = sample_fractal_voronoi(&batch, &settings.noise, &settings.voronoi);
                out.copy_from_slice(&sampled.to_array()[..out.len()]);
            }
        });

    Ok(NoiseField { resolution, values })
}
