//! linebox engine crate.
//!
//! Owns the platform + GPU runtime pieces: window and event loop, GPU device
//! and surface, held-key input state, frame timing, a line-list renderer and
//! logger setup. Applications implement `core::App` and hand it to
//! `window::Runtime::run`.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod render;
