//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: lifecycle callbacks plus a per-frame context that hides the
//! window/GPU plumbing.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
