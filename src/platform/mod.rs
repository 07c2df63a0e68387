//! Platform abstraction layer
//!
//! Keeps the simulation agnostic of devices and wall clocks:
//! - Fixed-rate frame clock and native frame pacing
//! - Abstract input events, drained once per frame

pub mod input;
pub mod time;

pub use input::{InputEvent, InputQueue};
pub use time::FrameClock;
#[cfg(not(target_arch = "wasm32"))]
pub use time::FramePacer;
