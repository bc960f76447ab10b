//! The demo application: one square outline driven by the keyboard.

use anyhow::Result;

use linebox_engine::coords::Viewport;
use linebox_engine::core::{App, AppControl, FrameCtx};
use linebox_engine::input::InputState;
use linebox_engine::render::LineRenderer;
use linebox_engine::time::FrameTime;

use crate::config::{Speeds, SQUARE_LENGTH};
use crate::dispatch::dispatch;
use crate::geometry::square_outline;
use crate::transform::TransformState;

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

#[derive(Default)]
pub struct LineboxApp {
    speeds: Speeds,
    state: Option<TransformState>,
    renderer: Option<LineRenderer>,
}

impl LineboxApp {
    pub fn new(speeds: Speeds) -> Self {
        Self {
            speeds,
            ..Self::default()
        }
    }
}

impl App for LineboxApp {
    fn on_init(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();
        let renderer = LineRenderer::new(&rctx, &square_outline(SQUARE_LENGTH))?;
        log::debug!("uploaded {} outline vertices", renderer.vertex_count());

        self.renderer = Some(renderer);
        self.state = Some(TransformState::new(ctx.viewport()));
        Ok(())
    }

    fn on_resize(&mut self, viewport: Viewport) {
        if let Some(state) = self.state.as_mut() {
            state.resize(viewport);
        }
    }

    fn on_update(&mut self, input: &InputState, time: FrameTime) {
        if let Some(state) = self.state {
            self.state = Some(dispatch(state, time.dt, &self.speeds, |k| input.key_down(k)));
        }
    }

    fn on_render(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(renderer), Some(state)) = (self.renderer.as_ref(), self.state.as_ref()) else {
            return AppControl::Continue;
        };
        let uniforms = state.uniforms();

        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, &uniforms))
    }

    fn on_exit(&mut self) {
        // Buffers and pipeline go before the device and surface.
        self.renderer = None;
        log::debug!("renderer released");
    }
}
