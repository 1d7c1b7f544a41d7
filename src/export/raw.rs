//! RAW export of sampled fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::sampling::NoiseField;

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidValueRange(f32, f32),
}

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawFormat {
    /// 16-bit unsigned integer, little-endian.
    #[default]
    R16LittleEndian,
    /// 16-bit unsigned integer, big-endian.
    R16BigEndian,
    /// 32-bit float, little-endian, values written unnormalized.
    R32Float,
}

impl RawFormat {
    /// Bytes written per sample.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            RawFormat::R16LittleEndian | RawFormat::R16BigEndian => 2,
            RawFormat::R32Float => 4,
        }
    }
}

/// Writes a field as headerless RAW samples in row-major order.
///
/// The 16-bit formats map `[min_value, max_value]` onto `[0, 65535]`,
/// clamping values outside the range. `R32Float` ignores the range.
pub fn export_field_raw(
    field: &NoiseField,
    path: &Path,
    format: RawFormat,
    min_value: f32,
    max_value: f32,
) -> Result<(), RawExportError> {
    if format != RawFormat::R32Float && min_value >= max_value {
        return Err(RawExportError::InvalidValueRange(min_value, max_value));
    }

    let range = max_value - min_value;
    let quantize = |v: f32| (((v - min_value) / range).clamp(0.0, 1.0) * 65535.0) as u16;
    let encode = |v: f32, out: &mut Vec<u8>| match format {
        RawFormat::R16LittleEndian => out.extend_from_slice(&quantize(v).to_le_bytes()),
        RawFormat::R16BigEndian => out.extend_from_slice(&quantize(v).to_be_bytes()),
        RawFormat::R32Float => out.extend_from_slice(&v.to_le_bytes()),
    };

    let mut bytes = Vec::with_capacity(field.values.len() * format.bytes_per_sample());
    for &v in &field.values {
        encode(v, &mut bytes);
    }

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    Ok(())
}

/// Returns the expected file size for a RAW export.
pub fn expected_file_size(resolution: u32, format: RawFormat) -> u64 {
    (resolution as u64) * (resolution as u64) * format.bytes_per_sample() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ramp(resolution: u32) -> NoiseField {
        let n = (resolution * resolution) as usize;
        NoiseField {
            resolution,
            values: (0..n).map(|i| i as f32 / n as f32).collect(),
        }
    }

    #[test]
    fn test_export_raw_r16() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_field_raw(&ramp(64), &path, RawFormat::R16LittleEndian, 0.0, 1.0).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert_eq!(metadata.len(), expected_file_size(64, RawFormat::R16LittleEndian));
    }

    #[test]
    fn test_export_raw_r32_round_trips_values() {
        let field = ramp(8);
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_field_raw(&field, &path, RawFormat::R32Float, 0.0, 0.0).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len() as u64, expected_file_size(8, RawFormat::R32Float));
        let read: Vec<f32> = data
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        assert_eq!(read, field.values);
    }

    #[test]
    fn test_raw_content_correctness() {
        let field = NoiseField {
            resolution: 2,
            values: vec![0.0, 0.5, 2.0, 1.0],
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");

        export_field_raw(&field, &path, RawFormat::R16BigEndian, 0.0, 1.0).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len(), 8);
        assert_eq!(u16::from_be_bytes([data[0], data[1]]), 0);
        assert!((u16::from_be_bytes([data[2], data[3]]) as i32 - 32767).abs() < 2);
        // Clamped.
        assert_eq!(u16::from_be_bytes([data[4], data[5]]), 65535);
        assert_eq!(u16::from_be_bytes([data[6], data[7]]), 65535);
    }

    #[test]
    fn test_little_endian_byte_order() {
        let field = NoiseField {
            resolution: 1,
            values: vec![1.0],
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("le.raw");

        export_field_raw(&field, &path, RawFormat::R16LittleEndian, 0.0, 2.0).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len(), RawFormat::R16LittleEndian.bytes_per_sample());
        assert_eq!(u16::from_le_bytes([data[0], data[1]]), 32767);
    }

    #[test]
    fn test_invalid_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.raw");
        let result = export_field_raw(&ramp(4), &path, RawFormat::R16LittleEndian, 1.0, 1.0);
        assert!(matches!(result, Err(RawExportError::InvalidValueRange(_, _))));
    }
}
