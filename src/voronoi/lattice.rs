//! Integer lattices that partition sample space into unit cells.

use std::fmt;
use std::str::FromStr;

use glam::{IVec4, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Cell index and position within the cell for four coordinates on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSpan4 {
    /// Cell containing the sample.
    pub p0: IVec4,
    /// Offset of the sample from the cell's lower corner, in `[0, 1)`.
    pub g0: Vec4,
}

/// Maps coordinates onto lattice cells at a given integer frequency.
///
/// `frequency` must be at least 1.
pub trait Lattice {
    /// Scales `coordinates` by `frequency` and splits them into cell and offset.
    fn span(coordinates: Vec4, frequency: u32) -> LatticeSpan4;

    /// Fixes up a cell index one step away from a span's `p0`.
    fn validate_single_step(points: IVec4, frequency: u32) -> IVec4;
}

/// Unbounded lattice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normal;

/// Lattice wrapping every `frequency` cells, so the field repeats on unit
/// intervals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tiling;

fn floor_split(coordinates: Vec4, frequency: u32) -> (IVec4, Vec4) {
    let scaled = coordinates * frequency as f32;
    let points = scaled.floor();
    (points.as_ivec4(), scaled - points)
}

impl Lattice for Normal {
    fn span(coordinates: Vec4, frequency: u32) -> LatticeSpan4 {
        let (p0, g0) = floor_split(coordinates, frequency);
        LatticeSpan4 { p0, g0 }
    }

    #[inline]
    fn validate_single_step(points: IVec4, _frequency: u32) -> IVec4 {
        points
    }
}

impl Lattice for Tiling {
    fn span(coordinates: Vec4, frequency: u32) -> LatticeSpan4 {
        let (p0, g0) = floor_split(coordinates, frequency);
        let period = frequency as i32;
        LatticeSpan4 {
            p0: IVec4::from_array(p0.to_array().map(|p| p.rem_euclid(period))),
            g0,
        }
    }

    #[inline]
    fn validate_single_step(points: IVec4, frequency: u32) -> IVec4 {
        let period = frequency as i32;
        IVec4::from_array(points.to_array().map(|p| {
            if p == period {
                0
            } else if p == -1 {
                period - 1
            } else {
                p
            }
        }))
    }
}

/// Adds `offset` to every lane, wrapping on overflow.
#[inline]
pub(crate) fn step(points: IVec4, offset: i32) -> IVec4 {
    IVec4::from_array(points.to_array().map(|p| p.wrapping_add(offset)))
}

/// Runtime choice of lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeKind {
    #[default]
    Normal,
    Tiling,
}

impl LatticeKind {
    pub fn name(&self) -> &'static str {
        match self {
            LatticeKind::Normal => "normal",
            LatticeKind::Tiling => "tiling",
        }
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatticeKind {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(LatticeKind::Normal),
            "tiling" => Ok(LatticeKind::Tiling),
            other => Err(NoiseError::invalid(format!("unknown lattice '{other}'"))),
        }
    }
}
