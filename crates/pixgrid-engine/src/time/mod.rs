//! Frame timing.
//!
//! The engine itself is frame-stepped and does not read the clock; applications
//! that move things at a fixed speed keep one `FrameClock` and `tick()` it once
//! per frame.

mod frame_clock;

pub use frame_clock::FrameClock;
