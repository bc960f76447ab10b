//! Coordinate types shared between the runtime and renderers.
//!
//! Framebuffer space is measured in physical pixels.

mod viewport;

pub use viewport::Viewport;
