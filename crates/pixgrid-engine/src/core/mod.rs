//! Engine facade.
//!
//! [`Canvas`] holds every piece of per-frame state and runs without a window.
//! [`Engine`] composes it with the platform runtime and the grid renderer.

mod canvas;
mod engine;

pub use canvas::{Canvas, FramePlan};
pub use engine::Engine;
