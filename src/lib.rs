//! Deterministic four-lane hashing and cellular noise.
//!
//! This crate provides a seeded xxHash-style integer hash that processes four
//! samples per call, and a Voronoi evaluator built on it that produces Worley
//! and Chebyshev cellular noise (F1, F2 and F2 - F1). Results are bit-exact
//! for a given seed and position.

pub mod error;
pub mod lanes;
pub mod hash;
pub mod voronoi;
pub mod noise;
pub mod sampling;
pub mod export;

pub use error::NoiseError;
pub use lanes::Positions4;
pub use hash::{LaneHash, FinalizedHash};
pub use voronoi::{
    evaluate_voronoi, Dimensions, DistanceMetric, FeatureSelector, LatticeKind, Minima,
    VoronoiConfig, VoronoiKernel,
};
pub use noise::{FractalNoiseConfig, NoiseSettings};
pub use sampling::{NoiseField, sample_grid};
