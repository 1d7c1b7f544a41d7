//! Configuration for cellular noise evaluation.

use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use super::distance::{Chebyshev, DistanceMetric, VoronoiDistance, Worley};
use super::evaluate::{voronoi_1d, voronoi_2d, voronoi_3d, VoronoiKernel};
use super::function::{FeatureSelector, VoronoiFunction, F1, F2, F2MinusF1};
use super::lattice::{Lattice, LatticeKind, Normal, Tiling};
use crate::error::NoiseError;
use crate::hash::LaneHash;
use crate::lanes::Positions4;

/// Number of input axes the evaluator scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensions {
    One,
    #[default]
    Two,
    Three,
}

impl Dimensions {
    /// Number of axes.
    pub fn count(&self) -> u8 {
        match self {
            Dimensions::One => 1,
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }

    /// Number of lattice cells visited per sample.
    pub fn neighborhood_size(&self) -> usize {
        3usize.pow(self.count() as u32)
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensions::One),
            2 => Ok(Dimensions::Two),
            3 => Ok(Dimensions::Three),
            other => Err(NoiseError::invalid(format!(
                "dimensions must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(dimensions: Dimensions) -> u8 {
        dimensions.count()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.count())
    }
}

impl FromStr for Dimensions {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches(['d', 'D']);
        let value: u8 = digits
            .parse()
            .map_err(|_| NoiseError::invalid(format!("invalid dimensions '{s}'")))?;
        Dimensions::try_from(value)
    }
}

/// Which cellular noise to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Distance metric between sample and feature points.
    pub metric: DistanceMetric,
    /// Which nearest distance (or gap) to report.
    pub function: FeatureSelector,
    /// Unbounded or periodic lattice.
    pub lattice: LatticeKind,
    /// Number of input axes.
    pub dimensions: Dimensions,
}

impl VoronoiConfig {
    /// Classic Worley F1 cells.
    pub fn cells(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            ..Default::default()
        }
    }

    /// Thin ridges along cell borders (F2 - F1).
    pub fn cracks(dimensions: Dimensions) -> Self {
        Self {
            function: FeatureSelector::F2MinusF1,
            dimensions,
            ..Default::default()
        }
    }

    /// Square-edged cells from the Chebyshev metric.
    pub fn chebyshev_tiles(dimensions: Dimensions) -> Self {
        Self {
            metric: DistanceMetric::Chebyshev,
            dimensions,
            ..Default::default()
        }
    }

    /// Returns the same configuration on a tiling lattice.
    pub fn tiling(self) -> Self {
        Self {
            lattice: LatticeKind::Tiling,
            ..self
        }
    }

    /// Resolves the runtime choices to a monomorphized evaluator.
    ///
    /// Resolve once and reuse the kernel in hot loops.
    pub fn kernel(&self) -> VoronoiKernel {
        match self.lattice {
            LatticeKind::Normal => with_metric::<Normal>(self.metric, self.function, self.dimensions),
            LatticeKind::Tiling => with_metric::<Tiling>(self.metric, self.function, self.dimensions),
        }
    }

    /// Evaluates one batch with an already seeded hash.
    ///
    /// `frequency` must be at least 1. Debug builds panic on 0.
    pub fn evaluate(&self, positions: &Positions4, hash: LaneHash, frequency: u32) -> Vec4 {
        (self.kernel())(positions, hash, frequency)
    }
}

fn with_metric<L: Lattice>(
    metric: DistanceMetric,
    function: FeatureSelector,
    dimensions: Dimensions,
) -> VoronoiKernel {
    match metric {
        DistanceMetric::Worley => with_function::<L, Worley>(function, dimensions),
        DistanceMetric::Chebyshev => with_function::<L, Chebyshev>(function, dimensions),
    }
}

fn with_function<L: Lattice, D: VoronoiDistance>(
    function: FeatureSelector,
    dimensions: Dimensions,
) -> VoronoiKernel {
    match function {
        FeatureSelector::F1 => with_dimensions::<L, D, F1>(dimensions),
        FeatureSelector::F2 => with_dimensions::<L, D, F2>(dimensions),
        FeatureSelector::F2MinusF1 => with_dimensions::<L, D, F2MinusF1>(dimensions),
    }
}

fn with_dimensions<L: Lattice, D: VoronoiDistance, F: VoronoiFunction>(
    dimensions: Dimensions,
) -> VoronoiKernel {
    match dimensions {
        Dimensions::One => voronoi_1d::<L, D, F> as VoronoiKernel,
        Dimensions::Two => voronoi_2d::<L, D, F> as VoronoiKernel,
        Dimensions::Three => voronoi_3d::<L, D, F> as VoronoiKernel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec4, Vec3};

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "frequency must be at least 1")]
    fn test_zero_frequency_is_rejected() {
        let positions = Positions4::splat(Vec3::new(0.25, 0.5, 0.75));
        VoronoiConfig::default()
            .tiling()
            .evaluate(&positions, LaneHash::seed(IVec4::ZERO), 0);
    }

    #[test]
    fn test_default_config() {
        let config = VoronoiConfig::default();
        assert_eq!(config.metric, DistanceMetric::Worley);
        assert_eq!(config.function, FeatureSelector::F1);
        assert_eq!(config.lattice, LatticeKind::Normal);
        assert_eq!(config.dimensions, Dimensions::Two);
    }

    #[test]
    fn test_presets() {
        assert_eq!(VoronoiConfig::cracks(Dimensions::Three).function, FeatureSelector::F2MinusF1);
        assert_eq!(VoronoiConfig::chebyshev_tiles(Dimensions::One).metric, DistanceMetric::Chebyshev);
        assert_eq!(VoronoiConfig::cells(Dimensions::Two).tiling().lattice, LatticeKind::Tiling);
    }

    #[test]
    fn test_dimensions_parse() {
        assert_eq!("3".parse::<Dimensions>().unwrap(), Dimensions::Three);
        assert_eq!("2d".parse::<Dimensions>().unwrap(), Dimensions::Two);
        assert!("4".parse::<Dimensions>().is_err());
        assert!(Dimensions::try_from(0).is_err());
        assert_eq!(Dimensions::Three.neighborhood_size(), 27);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = VoronoiConfig::chebyshev_tiles(Dimensions::Three).tiling();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"dimensions\":3"));
        let parsed: VoronoiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_rejects_bad_dimensions() {
        let result: Result<VoronoiConfig, _> = serde_json::from_str(r#"{"dimensions": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_kernel_matches_direct_call() {
        let positions = Positions4::from_points([Vec3::new(0.3, 0.7, 0.1), Vec3::ONE, Vec3::ZERO, Vec3::NEG_ONE]);
        let hash = LaneHash::seed(IVec4::splat(17));
        let config = VoronoiConfig {
            metric: DistanceMetric::Chebyshev,
            function: FeatureSelector::F2,
            lattice: LatticeKind::Tiling,
            dimensions: Dimensions::Three,
        };
        let via_kernel = config.evaluate(&positions, hash, 4);
        let direct = voronoi_3d::<Tiling, Chebyshev, F2>(&positions, hash, 4);
        assert_eq!(via_kernel, direct);
    }

    #[test]
    fn test_tiling_repeats_every_unit() {
        let config = VoronoiConfig::cells(Dimensions::Two).tiling();
        let hash = LaneHash::seed(IVec4::splat(99));
        let base = Positions4::from_points([
            Vec3::new(0.3125, 0.125, 0.0),
            Vec3::new(0.75, 0.5, 0.0),
            Vec3::new(0.0625, 0.9375, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
        ]);
        let shifted = Positions4::new(base.x + Vec4::ONE, base.y - Vec4::splat(2.0), base.z);
        assert_eq!(config.evaluate(&base, hash, 4), config.evaluate(&shifted, hash, 4));
    }
}
