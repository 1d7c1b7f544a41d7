//! Feature selectors: which nearest-point distance becomes the noise value.

use std::fmt;
use std::str::FromStr;

use glam::Vec4;
use serde::{Deserialize, Serialize};

use super::minima::Minima;
use crate::error::NoiseError;

/// Reduces finalized minima to the reported value.
pub trait VoronoiFunction {
    fn evaluate(minima: Minima) -> Vec4;
}

/// Distance to the nearest point.
#[derive(Debug, Clone, Copy, Default)]
pub struct F1;

/// Distance to the second-nearest point.
#[derive(Debug, Clone, Copy, Default)]
pub struct F2;

/// Gap between the two nearest points; never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct F2MinusF1;

impl VoronoiFunction for F1 {
    #[inline]
    fn evaluate(minima: Minima) -> Vec4 {
        minima.first
    }
}

impl VoronoiFunction for F2 {
    #[inline]
    fn evaluate(minima: Minima) -> Vec4 {
        minima.second
    }
}

impl VoronoiFunction for F2MinusF1 {
    #[inline]
    fn evaluate(minima: Minima) -> Vec4 {
        minima.second - minima.first
    }
}

/// Runtime choice of feature selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureSelector {
    #[default]
    F1,
    F2,
    F2MinusF1,
}

impl FeatureSelector {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureSelector::F1 => "f1",
            FeatureSelector::F2 => "f2",
            FeatureSelector::F2MinusF1 => "f2-minus-f1",
        }
    }
}

impl fmt::Display for FeatureSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureSelector {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f1" => Ok(FeatureSelector::F1),
            "f2" => Ok(FeatureSelector::F2),
            "f2-minus-f1" | "f2-f1" | "f2minusf1" => Ok(FeatureSelector::F2MinusF1),
            other => Err(NoiseError::invalid(format!("unknown feature selector '{other}'"))),
        }
    }
}
