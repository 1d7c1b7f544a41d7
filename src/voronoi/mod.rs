//! Cellular (Voronoi / Worley) noise.
//!
//! The evaluator is generic over three strategies, each a zero-sized type:
//! - a [`Lattice`] mapping coordinates onto cells ([`Normal`], [`Tiling`])
//! - a [`VoronoiDistance`] metric ([`Worley`], [`Chebyshev`])
//! - a [`VoronoiFunction`] feature selector ([`F1`], [`F2`], [`F2MinusF1`])
//!
//! [`VoronoiConfig`] picks a combination at runtime and resolves it to a
//! monomorphized [`VoronoiKernel`], so the inner loop never branches on the
//! choice.

mod config;
mod distance;
mod evaluate;
mod function;
mod lattice;
mod minima;

pub use config::{Dimensions, VoronoiConfig};
pub use distance::{Chebyshev, DistanceMetric, VoronoiDistance, Worley};
pub use evaluate::{evaluate_voronoi, voronoi_1d, voronoi_2d, voronoi_3d, VoronoiKernel};
pub use function::{FeatureSelector, VoronoiFunction, F1, F2, F2MinusF1};
pub use lattice::{Lattice, LatticeKind, LatticeSpan4, Normal, Tiling};
pub use minima::Minima;
