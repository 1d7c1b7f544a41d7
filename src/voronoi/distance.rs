//! Distance metrics for cellular noise.

use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use super::minima::Minima;
use crate::error::NoiseError;

/// How per-axis offsets combine into a distance, and how the accumulated
/// minima are brought into final units.
///
/// Each finalizer must only be applied to minima gathered with the distance
/// function of the same dimensionality.
pub trait VoronoiDistance {
    fn distance_1d(x: Vec4) -> Vec4;
    fn distance_2d(x: Vec4, y: Vec4) -> Vec4;
    fn distance_3d(x: Vec4, y: Vec4, z: Vec4) -> Vec4;
    fn finalize_1d(minima: Minima) -> Minima;
    fn finalize_2d(minima: Minima) -> Minima;
    fn finalize_3d(minima: Minima) -> Minima;
}

/// Euclidean distance, kept squared until finalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Worley;

impl VoronoiDistance for Worley {
    #[inline]
    fn distance_1d(x: Vec4) -> Vec4 {
        x.abs()
    }

    #[inline]
    fn distance_2d(x: Vec4, y: Vec4) -> Vec4 {
        x * x + y * y
    }

    #[inline]
    fn distance_3d(x: Vec4, y: Vec4, z: Vec4) -> Vec4 {
        x * x + y * y + z * z
    }

    fn finalize_1d(minima: Minima) -> Minima {
        minima
    }

    /// Clamps to the unit neighborhood, then takes the square root.
    fn finalize_2d(minima: Minima) -> Minima {
        minima.map(|v| sqrt(v.min(Vec4::ONE)))
    }

    fn finalize_3d(minima: Minima) -> Minima {
        Self::finalize_2d(minima)
    }
}

/// Maximum of the absolute per-axis offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl VoronoiDistance for Chebyshev {
    #[inline]
    fn distance_1d(x: Vec4) -> Vec4 {
        x.abs()
    }

    #[inline]
    fn distance_2d(x: Vec4, y: Vec4) -> Vec4 {
        x.abs().max(y.abs())
    }

    #[inline]
    fn distance_3d(x: Vec4, y: Vec4, z: Vec4) -> Vec4 {
        x.abs().max(y.abs()).max(z.abs())
    }

    fn finalize_1d(minima: Minima) -> Minima {
        minima
    }

    fn finalize_2d(minima: Minima) -> Minima {
        minima
    }

    fn finalize_3d(minima: Minima) -> Minima {
        minima
    }
}

#[inline]
fn sqrt(v: Vec4) -> Vec4 {
    Vec4::from_array(v.to_array().map(f32::sqrt))
}

/// Runtime choice of distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    #[default]
    Worley,
    Chebyshev,
}

impl DistanceMetric {
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Worley => "worley",
            DistanceMetric::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "worley" | "euclidean" => Ok(DistanceMetric::Worley),
            "chebyshev" => Ok(DistanceMetric::Chebyshev),
            other => Err(NoiseError::invalid(format!("unknown distance metric '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worley_distances_are_squared() {
        let x = Vec4::new(3.0, -1.0, 0.0, 0.5);
        let y = Vec4::new(4.0, 1.0, 0.0, 0.5);
        assert_eq!(Worley::distance_1d(x), Vec4::new(3.0, 1.0, 0.0, 0.5));
        assert_eq!(Worley::distance_2d(x, y), Vec4::new(25.0, 2.0, 0.0, 0.5));
        assert_eq!(Worley::distance_3d(x, y, Vec4::ONE), Vec4::new(26.0, 3.0, 1.0, 1.5));
    }

    #[test]
    fn test_chebyshev_takes_max_abs() {
        let x = Vec4::new(3.0, -1.0, 0.0, -0.5);
        let y = Vec4::new(-4.0, 0.5, 0.0, 0.25);
        let z = Vec4::new(1.0, -2.0, 0.1, 0.0);
        assert_eq!(Chebyshev::distance_2d(x, y), Vec4::new(4.0, 1.0, 0.0, 0.5));
        assert_eq!(Chebyshev::distance_3d(x, y, z), Vec4::new(4.0, 2.0, 0.1, 0.5));
    }

    #[test]
    fn test_worley_finalize_clamps_to_one() {
        let minima = Minima {
            first: Vec4::new(0.25, 1.0, 1.5, 9.0),
            second: Vec4::new(4.0, 0.0, 2.0, 1.0),
        };
        let finalized = Worley::finalize_2d(minima);
        assert_eq!(finalized.first, Vec4::new(0.5, 1.0, 1.0, 1.0));
        assert_eq!(finalized.second, Vec4::new(1.0, 0.0, 1.0, 1.0));
        assert_eq!(Worley::finalize_3d(minima), finalized);
    }

    #[test]
    fn test_identity_finalizers() {
        let minima = Minima {
            first: Vec4::new(0.25, 1.0, 1.5, 9.0),
            second: Vec4::new(4.0, 2.0, 2.0, 10.0),
        };
        assert_eq!(Worley::finalize_1d(minima), minima);
        assert_eq!(Chebyshev::finalize_1d(minima), minima);
        assert_eq!(Chebyshev::finalize_2d(minima), minima);
        assert_eq!(Chebyshev::finalize_3d(minima), minima);
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("Worley".parse::<DistanceMetric>().unwrap(), DistanceMetric::Worley);
        assert_eq!("chebyshev".parse::<DistanceMetric>().unwrap(), DistanceMetric::Chebyshev);
        assert!("manhattan".parse::<DistanceMetric>().is_err());
    }
}
