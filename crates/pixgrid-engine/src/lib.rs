//! Pixgrid engine crate.
//!
//! A fixed grid of colored cells drawn with one indexed draw call per frame,
//! plus the window, input and GPU plumbing around it. Applications drive it
//! through [`Engine`].

pub mod config;
pub mod coords;
pub mod core;
pub mod device;
pub mod grid;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;

pub use crate::config::EngineConfig;
pub use crate::core::Engine;
pub use crate::grid::GridError;
pub use crate::input::{InputState, Key, MouseButton};
pub use crate::paint::{palette, PackedRgb};
