//! Complete, serializable description of a noise field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::fractal::FractalNoiseConfig;
use crate::error::NoiseError;
use crate::voronoi::VoronoiConfig;

/// Fractal parameters plus the cellular noise they sum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    pub noise: FractalNoiseConfig,
    pub voronoi: VoronoiConfig,
}

impl NoiseSettings {
    pub fn new(noise: FractalNoiseConfig, voronoi: VoronoiConfig) -> Self {
        Self { noise, voronoi }
    }

    /// Validates the fractal parameters.
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.noise.validate()
    }

    /// Parses and validates settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let settings: NoiseSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, NoiseError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Writes settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), NoiseError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voronoi::{Dimensions, DistanceMetric, FeatureSelector};
    use tempfile::tempdir;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = NoiseSettings::from_json(
            r#"{ "noise": { "octaves": 3 }, "voronoi": { "metric": "chebyshev", "function": "f2-minus-f1" } }"#,
        )
        .unwrap();
        assert_eq!(settings.noise.octaves, 3);
        assert_eq!(settings.noise.frequency, FractalNoiseConfig::default().frequency);
        assert_eq!(settings.voronoi.metric, DistanceMetric::Chebyshev);
        assert_eq!(settings.voronoi.function, FeatureSelector::F2MinusF1);
        assert_eq!(settings.voronoi.dimensions, Dimensions::Two);
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        assert!(NoiseSettings::from_json(r#"{ "noise": { "octaves": 0 } }"#).is_err());
        assert!(NoiseSettings::from_json(r#"{ "voronoi": { "metric": "taxicab" } }"#).is_err());
        assert!(NoiseSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = NoiseSettings::new(
            FractalNoiseConfig::cracked(42),
            VoronoiConfig::cracks(Dimensions::Three).tiling(),
        );

        settings.save(&path).unwrap();
        let loaded = NoiseSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = NoiseSettings::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(NoiseError::Io(_))));
    }
}
