//! Multi-octave fractal summation of cellular noise.

use glam::{IVec4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::hash::LaneHash;
use crate::lanes::{Positions4, LANES};
use crate::voronoi::VoronoiConfig;

/// Highest lattice frequency any octave may reach.
pub const MAX_FREQUENCY: u32 = 1 << 20;

/// Configuration for multi-octave fractal noise generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalNoiseConfig {
    /// Number of noise octaves (1-8 typical).
    pub octaves: u8,
    /// Lattice cells per unit for the first octave.
    pub frequency: u32,
    /// Frequency multiplier per octave (typically 2).
    pub lacunarity: u32,
    /// Amplitude decay per octave (0.4-0.6 typical).
    pub persistence: f32,
    /// Random seed for reproducible generation.
    pub seed: i32,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 1,
            frequency: 4,
            lacunarity: 2,
            persistence: 0.5,
            seed: 0,
        }
    }
}

impl FractalNoiseConfig {
    /// Creates a new noise configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Single octave of large cells.
    pub fn cells(seed: i32) -> Self {
        Self {
            octaves: 1,
            frequency: 8,
            seed,
            ..Default::default()
        }
    }

    /// Several octaves of cells layered into a cracked, rocky texture.
    pub fn cracked(seed: i32) -> Self {
        Self {
            octaves: 4,
            frequency: 4,
            lacunarity: 2,
            persistence: 0.5,
            seed,
        }
    }

    /// Checks that every octave has a usable lattice frequency.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::invalid("octaves must be at least 1"));
        }
        if self.frequency == 0 {
            return Err(NoiseError::invalid("frequency must be at least 1"));
        }
        if self.lacunarity == 0 {
            return Err(NoiseError::invalid("lacunarity must be at least 1"));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(NoiseError::invalid(format!(
                "persistence must be positive and finite, got {}",
                self.persistence
            )));
        }
        let top = (1..self.octaves).try_fold(self.frequency, |f, _| f.checked_mul(self.lacunarity));
        match top {
            Some(f) if f <= MAX_FREQUENCY => Ok(()),
            _ => Err(NoiseError::invalid(format!(
                "highest octave frequency exceeds {MAX_FREQUENCY}"
            ))),
        }
    }
}

/// Samples fractal cellular noise for one batch of four positions.
///
/// Every octave reuses the seeded hash offset by the octave index, so octaves
/// are decorrelated without reseeding. The sum is normalized by the total
/// amplitude.
pub fn sample_fractal_voronoi(
    positions: &Positions4,
    config: &FractalNoiseConfig,
    voronoi: &VoronoiConfig,
) -> Vec4 {
    let kernel = voronoi.kernel();
    let hash = LaneHash::seed(IVec4::splat(config.seed));

    let mut total = Vec4::ZERO;
    let mut amplitude = 1.0f32;
    let mut amplitude_sum = 0.0f32;
    let mut frequency = config.frequency;

    for octave in 0..config.octaves {
        total += kernel(positions, hash + octave as i32, frequency) * amplitude;
        amplitude_sum += amplitude;
        frequency = frequency.saturating_mul(config.lacunarity);
        amplitude *= config.persistence;
    }

    if amplitude_sum == 0.0 {
        return total;
    }
    total / amplitude_sum
}

/// Samples fractal cellular noise for any number of positions.
///
/// Positions are packed four at a time; a short final batch is padded by
/// repeating its last position and the padded lanes are dropped.
pub fn sample_fractal_voronoi_batch(
    positions: &[Vec3],
    config: &FractalNoiseConfig,
    voronoi: &VoronoiConfig,
) -> Vec<f32> {
    let mut results = Vec::with_capacity(positions.len());
    for chunk in positions.chunks(LANES) {
        let Some(batch) = Positions4::from_slice_padded(chunk) else {
            continue;
        };
        let values = sample_fractal_voronoi(&batch, config, voronoi);
        results.extend_from_slice(&values.to_array()[..chunk.len()]);
    }
    results
}
