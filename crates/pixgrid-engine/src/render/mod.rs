//! GPU rendering subsystem.
//!
//! The grid renderer owns its pipeline and buffers and issues one indexed draw
//! per frame.
//!
//! Convention:
//! - CPU geometry is in physical pixels (top-left origin, +Y down).
//! - Vertex shader converts to clip space using a projection uniform.

mod ctx;
mod grid;

pub use ctx::RenderTarget;
pub use grid::GridRenderer;
