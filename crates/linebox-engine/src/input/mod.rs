//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window runtime translates platform events into `InputEvent`s and feeds
//! them to an `InputState`, which applications poll once per frame.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
