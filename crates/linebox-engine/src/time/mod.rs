//! Time subsystem.
//!
//! One `FrameClock` per render loop; call `tick()` once per frame to obtain
//! the `FrameTime` that drives time-based animation.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
