//! Platform abstraction layer
//!
//! Handles native window glue for:
//! - Input events (winit → tick commands)
//! - Time/ticks (fixed-step accumulator, frame cap, FPS)

pub mod input;
pub mod time;

pub use input::InputState;
pub use time::FrameClock;
