//! Seed / eat / finalize for the four-lane hash.

use std::ops::Add;

use glam::{BVec4, IVec4, UVec4, Vec4};

/// Avalanche multiplier for the first finalize round.
pub const PRIME_B: u32 = 0b1000_0101_1110_1011_1100_1010_0111_0111;
/// Streaming multiplier applied to eaten data, reused in finalize.
pub const PRIME_C: u32 = 0b1100_0010_1011_0010_1010_1110_0011_1101;
/// Post-rotation multiplier of the streaming mix.
pub const PRIME_D: u32 = 0b0010_0111_1101_0100_1110_1011_0010_1111;
/// Seed offset.
pub const PRIME_E: u32 = 0b0001_0110_0101_0110_0110_0111_1011_0001;

const BYTE_TO_UNIT: f32 = 1.0 / 255.0;

/// Applies `f` to every lane of `v`.
#[inline]
fn map_lanes(v: UVec4, f: impl Fn(u32) -> u32) -> UVec4 {
    UVec4::from_array(v.to_array().map(f))
}

/// Applies `f` lane-wise to `a` and `b`.
#[inline]
fn zip_lanes(a: UVec4, b: UVec4, f: impl Fn(u32, u32) -> u32) -> UVec4 {
    let a = a.to_array();
    let b = b.to_array();
    UVec4::new(f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3]))
}

/// Pre-avalanche hash state for four independent samples.
///
/// Values are immutable: [`LaneHash::eat`] returns a new accumulator. Two
/// hashes built from the same seed and the same sequence of eaten values are
/// always identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneHash {
    accumulator: UVec4,
}

impl LaneHash {
    /// Wraps a raw accumulator.
    pub const fn from_accumulator(accumulator: UVec4) -> Self {
        Self { accumulator }
    }

    /// Broadcasts a single-stream accumulator to all four lanes.
    pub const fn splat(accumulator: u32) -> Self {
        Self::from_accumulator(UVec4::splat(accumulator))
    }

    /// Returns the raw accumulator.
    pub fn accumulator(self) -> UVec4 {
        self.accumulator
    }

    /// Seeds each lane with `coordinate + PRIME_E`.
    pub fn seed(seed: IVec4) -> Self {
        Self::from_accumulator(map_lanes(seed.as_uvec4(), |s| s.wrapping_add(PRIME_E)))
    }

    /// Folds one value per lane into the accumulator.
    ///
    /// Axes must be eaten in the order x, y, z for results to match across
    /// callers.
    #[must_use]
    pub fn eat(self, data: IVec4) -> Self {
        Self::from_accumulator(zip_lanes(self.accumulator, data.as_uvec4(), |acc, d| {
            acc.wrapping_add(d.wrapping_mul(PRIME_C))
                .rotate_left(17)
                .wrapping_mul(PRIME_D)
        }))
    }

    /// Runs the avalanche rounds and returns the final bit pattern.
    pub fn finalize(self) -> FinalizedHash {
        FinalizedHash(map_lanes(self.accumulator, |mut a| {
            a ^= a >> 15;
            a = a.wrapping_mul(PRIME_B);
            a ^= a >> 13;
            a = a.wrapping_mul(PRIME_C);
            a ^= a >> 16;
            a
        }))
    }

    /// Lane-wise choice: lanes where `mask` is set take `b`, the rest take `a`.
    pub fn select(a: Self, b: Self, mask: BVec4) -> Self {
        Self::from_accumulator(UVec4::select(mask, b.accumulator, a.accumulator))
    }

    // Shortcuts that finalize first.

    pub fn bytes_a(self) -> UVec4 {
        self.finalize().bytes_a()
    }

    pub fn bytes_b(self) -> UVec4 {
        self.finalize().bytes_b()
    }

    pub fn bytes_c(self) -> UVec4 {
        self.finalize().bytes_c()
    }

    pub fn bytes_d(self) -> UVec4 {
        self.finalize().bytes_d()
    }

    pub fn floats01_a(self) -> Vec4 {
        self.finalize().floats01_a()
    }

    pub fn floats01_b(self) -> Vec4 {
        self.finalize().floats01_b()
    }

    pub fn floats01_c(self) -> Vec4 {
        self.finalize().floats01_c()
    }

    pub fn floats01_d(self) -> Vec4 {
        self.finalize().floats01_d()
    }

    pub fn get_bits(self, count: u32, shift: u32) -> UVec4 {
        self.finalize().get_bits(count, shift)
    }

    pub fn get_bits_as_floats01(self, count: u32, shift: u32) -> Vec4 {
        self.finalize().get_bits_as_floats01(count, shift)
    }
}

/// Offsets every lane's accumulator, e.g. to derive one stream per octave.
impl Add<i32> for LaneHash {
    type Output = LaneHash;

    fn add(self, rhs: i32) -> LaneHash {
        let rhs = rhs as u32;
        Self::from_accumulator(map_lanes(self.accumulator, |a| a.wrapping_add(rhs)))
    }
}

/// Avalanche-mixed output of a [`LaneHash`]: one 32-bit word per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FinalizedHash(UVec4);

impl FinalizedHash {
    /// Returns the four finalized words.
    pub fn words(self) -> UVec4 {
        self.0
    }

    /// Bits 0..8 of each lane.
    pub fn bytes_a(self) -> UVec4 {
        map_lanes(self.0, |w| w & 255)
    }

    /// Bits 8..16 of each lane.
    pub fn bytes_b(self) -> UVec4 {
        map_lanes(self.0, |w| (w >> 8) & 255)
    }

    /// Bits 16..24 of each lane.
    pub fn bytes_c(self) -> UVec4 {
        map_lanes(self.0, |w| (w >> 16) & 255)
    }

    /// Bits 24..32 of each lane.
    pub fn bytes_d(self) -> UVec4 {
        map_lanes(self.0, |w| w >> 24)
    }

    /// [`bytes_a`](Self::bytes_a) scaled to `[0, 1]`.
    pub fn floats01_a(self) -> Vec4 {
        self.bytes_a().as_vec4() * BYTE_TO_UNIT
    }

    /// [`bytes_b`](Self::bytes_b) scaled to `[0, 1]`.
    pub fn floats01_b(self) -> Vec4 {
        self.bytes_b().as_vec4() * BYTE_TO_UNIT
    }

    /// [`bytes_c`](Self::bytes_c) scaled to `[0, 1]`.
    pub fn floats01_c(self) -> Vec4 {
        self.bytes_c().as_vec4() * BYTE_TO_UNIT
    }

    /// [`bytes_d`](Self::bytes_d) scaled to `[0, 1]`.
    pub fn floats01_d(self) -> Vec4 {
        self.bytes_d().as_vec4() * BYTE_TO_UNIT
    }

    /// Extracts a `count`-bit field starting at bit `shift` in each lane.
    ///
    /// Requires `1 <= count <= 32` and `shift + count <= 32`. Out-of-range
    /// arguments are a caller bug: debug builds panic, release builds return
    /// a truncated field.
    pub fn get_bits(self, count: u32, shift: u32) -> UVec4 {
        debug_assert!(
            (1..=32).contains(&count) && shift + count <= 32,
            "bit field out of range: count={count}, shift={shift}"
        );
        let mask = field_mask(count);
        map_lanes(self.0, |w| w.checked_shr(shift).unwrap_or(0) & mask)
    }

    /// [`get_bits`](Self::get_bits) scaled by `1 / (2^count - 1)` into `[0, 1]`.
    pub fn get_bits_as_floats01(self, count: u32, shift: u32) -> Vec4 {
        let scale = 1.0 / field_mask(count) as f32;
        self.get_bits(count, shift).as_vec4() * scale
    }
}

impl From<LaneHash> for FinalizedHash {
    fn from(hash: LaneHash) -> Self {
        hash.finalize()
    }
}

/// All-ones mask of `count` bits, saturating at 32.
#[inline]
fn field_mask(count: u32) -> u32 {
    u32::MAX.checked_shr(32u32.saturating_sub(count)).unwrap_or(0)
}
