//! End-to-end: settings -> grid sampling -> export.

use cellnoise::export::{export_field_png, export_field_raw, expected_file_size, PngExportOptions, RawFormat};
use cellnoise::noise::{sample_fractal_voronoi_batch, FractalNoiseConfig, NoiseSettings};
use cellnoise::sampling::{grid_position, sample_grid};
use cellnoise::voronoi::{Dimensions, DistanceMetric, FeatureSelector, VoronoiConfig};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tempfile::tempdir;

#[test]
fn test_sample_and_export_png_and_raw() {
    let settings = NoiseSettings::new(FractalNoiseConfig::cracked(2024), VoronoiConfig::cracks(Dimensions::Two));
    let field = sample_grid(48, &settings).unwrap();
    let dir = tempdir().unwrap();

    let png = dir.path().join("field.png");
    export_field_png(&field, &png, &PngExportOptions::auto_range(&field)).unwrap();
    assert!(png.exists());

    let raw = dir.path().join("field.raw");
    export_field_raw(&field, &raw, RawFormat::R32Float, 0.0, 1.0).unwrap();
    assert_eq!(std::fs::metadata(&raw).unwrap().len(), expected_file_size(48, RawFormat::R32Float));
}

#[test]
fn test_same_settings_same_field() {
    let settings = NoiseSettings::new(
        FractalNoiseConfig::with_seed(-77),
        VoronoiConfig {
            metric: DistanceMetric::Chebyshev,
            function: FeatureSelector::F2,
            ..VoronoiConfig::cells(Dimensions::Three)
        },
    );
    let a = sample_grid(20, &settings).unwrap();
    let b = sample_grid(20, &settings).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tiling_field_wraps_at_unit_boundary() {
    // Grid positions are sampled in [0, 1); a tiling lattice must give the
    // same value one full period away.
    let settings = NoiseSettings::new(FractalNoiseConfig::cracked(5), VoronoiConfig::cells(Dimensions::Two).tiling());
    let resolution = 16;
    let field = sample_grid(resolution, &settings).unwrap();

    let shifted: Vec<Vec3> = (0..resolution)
        .flat_map(|y| (0..resolution).map(move |x| grid_position(x, y, resolution) + Vec3::new(1.0, -1.0, 0.0)))
        .collect();
    let values = sample_fractal_voronoi_batch(&shifted, &settings.noise, &settings.voronoi);
    assert_eq!(values, field.values);
}

#[test]
fn test_random_positions_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let points: Vec<Vec3> = (0..512)
        .map(|_| Vec3::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)))
        .collect();

    for dimensions in [Dimensions::One, Dimensions::Two, Dimensions::Three] {
        let values = sample_fractal_voronoi_batch(&points, &FractalNoiseConfig::cells(9), &VoronoiConfig::cracks(dimensions));
        assert_eq!(values.len(), points.len());
        for v in values {
            assert!((0.0..=2.0).contains(&v), "{dimensions}: {v}");
        }
    }
}
