//! Four-wide sample batches.
//!
//! Every noise call evaluates four independent samples at once. Each axis is
//! stored as a `glam::Vec4`, one lane per sample, so lane `i` of `x`, `y` and
//! `z` together form sample `i`.

mod positions;

pub use positions::{Positions4, LANES};
