//! Grid model: static mesh, mutable cell colors, and on-screen placement.
//!
//! Cells are addressed by `(x, y)` with `0 <= x < cols`, `0 <= y < rows`;
//! cell `(x, y)` owns vertices `(y * cols + x) * 4 .. + 4`.

mod cells;
mod error;
mod geometry;
mod layout;

pub use cells::CellBuffer;
pub use error::GridError;
pub use geometry::{GridGeometry, QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTEX_COUNT};
pub use layout::GridLayout;
