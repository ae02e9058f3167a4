//! Color model shared between the cell buffer and the renderer.
//!
//! Application code speaks packed `0xRRGGBB` integers; the GPU side stores
//! normalized `f32` triples. [`Rgb`] converts between the two.

pub mod color;
pub mod palette;

pub use color::{PackedRgb, Rgb, COLOR_EPSILON};
