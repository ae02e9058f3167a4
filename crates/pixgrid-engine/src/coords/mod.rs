//! Coordinate and matrix helpers.
//!
//! Canonical CPU space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The grid pipeline converts to clip space with a single projection uniform.

pub mod mat4;
mod vec2;

pub use mat4::Mat4;
pub use vec2::Vec2;
