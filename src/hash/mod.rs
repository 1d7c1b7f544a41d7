//! Four-lane seeded integer hashing.
//!
//! A small xxHash-style mixer that processes four 32-bit streams in lockstep,
//! one per spatial sample. The constants, shift amounts and operation order
//! are fixed: changing any of them changes every noise field built on top.

mod lane_hash;

pub use lane_hash::{LaneHash, FinalizedHash, PRIME_B, PRIME_C, PRIME_D, PRIME_E};
