//! Structure-of-arrays positions for four samples.

use glam::{Vec3, Vec4};

/// Number of samples processed per call.
pub const LANES: usize = 4;

/// Four sample positions stored axis by axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Positions4 {
    pub x: Vec4,
    pub y: Vec4,
    pub z: Vec4,
}

impl Positions4 {
    /// Creates a batch from per-axis lanes.
    pub fn new(x: Vec4, y: Vec4, z: Vec4) -> Self {
        Self { x, y, z }
    }

    /// Transposes four points into per-axis lanes.
    pub fn from_points(points: [Vec3; LANES]) -> Self {
        Self {
            x: Vec4::new(points[0].x, points[1].x, points[2].x, points[3].x),
            y: Vec4::new(points[0].y, points[1].y, points[2].y, points[3].y),
            z: Vec4::new(points[0].z, points[1].z, points[2].z, points[3].z),
        }
    }

    /// Builds a batch from up to four points, repeating the last one to fill
    /// the remaining lanes.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_slice_padded(points: &[Vec3]) -> Option<Self> {
        let last = *points.last()?;
        let mut lanes = [last; LANES];
        for (lane, point) in lanes.iter_mut().zip(points) {
            *lane = *point;
        }
        Some(Self::from_points(lanes))
    }

    /// Places the same point in every lane.
    pub fn splat(point: Vec3) -> Self {
        Self::from_points([point; LANES])
    }

    /// Returns the position held by `lane`.
    pub fn lane(&self, lane: usize) -> Vec3 {
        Vec3::new(self.x[lane], self.y[lane], self.z[lane])
    }

    /// Returns the four positions as points.
    pub fn to_points(&self) -> [Vec3; LANES] {
        [self.lane(0), self.lane(1), self.lane(2), self.lane(3)]
    }
}
