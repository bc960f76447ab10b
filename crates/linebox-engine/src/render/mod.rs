//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! `RenderTarget` handed out by `core::FrameCtx::render`.
//!
//! Convention: vertex positions are transformed by a caller-supplied MVP
//! matrix, so the coordinate space is whatever the caller's projection says.

mod ctx;
pub mod line;

pub use ctx::{RenderCtx, RenderTarget};
pub use line::{LineRenderer, LineUniforms, LineVertex};
