use anyhow::Result;

use crate::coords::Viewport;
use crate::input::InputState;
use crate::time::FrameTime;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
///
/// Per frame the runtime calls `on_update` then `on_render`. A framebuffer
/// resize calls `on_resize` then `on_render` right away, without `on_update`.
pub trait App {
    /// Called once after the window and GPU context exist. Create GPU
    /// resources here; an error aborts startup.
    fn on_init(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()>;

    /// Called when the framebuffer changes to a drawable size.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once per frame with the current held-key state.
    fn on_update(&mut self, input: &InputState, time: FrameTime) {
        let _ = (input, time);
    }

    /// Draws the current state.
    fn on_render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the loop is closing, before the GPU context is dropped.
    fn on_exit(&mut self) {}
}
