//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s, which update the
//! live [`DeviceInput`]; the [`InputTracker`] snapshots it once per frame.

mod device;
mod tracker;
mod types;

pub mod platform;

pub use device::{DeviceInput, InputSource};
pub use tracker::{InputState, InputTracker};
pub use types::{
    InputEvent,
    InputId,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
