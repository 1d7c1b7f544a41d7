//! Neighborhood scan that turns hashed lattice points into cellular noise.
//!
//! Each lattice cell holds one feature point, jittered inside the cell by the
//! cell's hash. A sample visits its own cell and every adjacent cell (3, 9 or
//! 27 cells), folds the distance to each feature point into a [`Minima`]
//! register, then finalizes with the metric and reduces with the selector.

use glam::{IVec4, Vec4};

use super::config::VoronoiConfig;
use super::distance::VoronoiDistance;
use super::function::VoronoiFunction;
use super::lattice::{step, Lattice};
use super::minima::Minima;
use crate::hash::LaneHash;
use crate::lanes::Positions4;

/// Monomorphized evaluator for one (lattice, metric, selector, dimensions)
/// combination.
///
/// `frequency` must be at least 1; tiling lattices divide by it.
pub type VoronoiKernel = fn(&Positions4, LaneHash, u32) -> Vec4;

/// One-dimensional cellular noise along `positions.x`.
pub fn voronoi_1d<L, D, F>(positions: &Positions4, hash: LaneHash, frequency: u32) -> Vec4
where
    L: Lattice,
    D: VoronoiDistance,
    F: VoronoiFunction,
{
    debug_assert!(frequency >= 1, "lattice frequency must be at least 1");
    let x = L::span(positions.x, frequency);
    let mut minima = Minima::INITIAL;
    for u in -1..=1 {
        let h = hash.eat(L::validate_single_step(step(x.p0, u), frequency));
        let x_offset = Vec4::splat(u as f32) - x.g0;
        minima = minima.update(D::distance_1d(h.floats01_a() + x_offset));
    }
    F::evaluate(D::finalize_1d(minima))
}

/// Two-dimensional cellular noise over `positions.x` and `positions.y`.
pub fn voronoi_2d<L, D, F>(positions: &Positions4, hash: LaneHash, frequency: u32) -> Vec4
where
    L: Lattice,
    D: VoronoiDistance,
    F: VoronoiFunction,
{
    debug_assert!(frequency >= 1, "lattice frequency must be at least 1");
    let x = L::span(positions.x, frequency);
    let y = L::span(positions.y, frequency);
    let mut minima = Minima::INITIAL;
    for u in -1..=1 {
        let hx = hash.eat(L::validate_single_step(step(x.p0, u), frequency));
        let x_offset = Vec4::splat(u as f32) - x.g0;
        for v in -1..=1 {
            let h = hx
                .eat(L::validate_single_step(step(y.p0, v), frequency))
                .finalize();
            let y_offset = Vec4::splat(v as f32) - y.g0;
            minima = minima.update(D::distance_2d(
                h.floats01_a() + x_offset,
                h.floats01_b() + y_offset,
            ));
        }
    }
    F::evaluate(D::finalize_2d(minima))
}

/// Three-dimensional cellular noise over all three axes.
pub fn voronoi_3d<L, D, F>(positions: &Positions4, hash: LaneHash, frequency: u32) -> Vec4
where
    L: Lattice,
    D: VoronoiDistance,
    F: VoronoiFunction,
{
    debug_assert!(frequency >= 1, "lattice frequency must be at least 1");
    let x = L::span(positions.x, frequency);
    let y = L::span(positions.y, frequency);
    let z = L::span(positions.z, frequency);
    let mut minima = Minima::INITIAL;
    for u in -1..=1 {
        let hx = hash.eat(L::validate_single_step(step(x.p0, u), frequency));
        let x_offset = Vec4::splat(u as f32) - x.g0;
        for v in -1..=1 {
            let hy = hx.eat(L::validate_single_step(step(y.p0, v), frequency));
            let y_offset = Vec4::splat(v as f32) - y.g0;
            for w in -1..=1 {
                let h = hy
                    .eat(L::validate_single_step(step(z.p0, w), frequency))
                    .finalize();
                let z_offset = Vec4::splat(w as f32) - z.g0;
                minima = minima.update(D::distance_3d(
                    h.floats01_a() + x_offset,
                    h.floats01_b() + y_offset,
                    h.floats01_c() + z_offset,
                ));
            }
        }
    }
    F::evaluate(D::finalize_3d(minima))
}

/// Evaluates one batch of four samples at unit frequency.
///
/// `seed` seeds each lane's hash independently; pass `IVec4::splat(s)` for a
/// single field.
pub fn evaluate_voronoi(positions: &Positions4, seed: IVec4, config: &VoronoiConfig) -> Vec4 {
    config.evaluate(positions, LaneHash::seed(seed), 1)
}
