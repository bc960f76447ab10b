use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputState, Key, KeyState};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "linebox".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until the window is closed.
    ///
    /// Returns an error if the event loop, window, GPU context or the app's
    /// own initialization fails before the first frame.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Loop phase. Closing is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    Starting,
    Running,
    Closing,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    input: InputState,
    clock: FrameClock,
    phase: Phase,

    /// First fatal error; returned from `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            input: InputState::default(),
            clock: FrameClock::new(),
            phase: Phase::Starting,
            fatal: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let mut entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize GPU for window")?;

        let app = &mut self.app;
        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
            };
            app.on_init(&mut ctx)
        })?;

        let gpu = entry.borrow_gpu();
        let size = gpu.size();
        let adapter = gpu.adapter_info();
        log::info!(
            "window ready: {}x{} on {} ({:?})",
            size.width,
            size.height,
            adapter.name,
            adapter.backend
        );

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        self.phase = Phase::Running;
        Ok(())
    }

    /// Records the first fatal error (reported by the caller of `Runtime::run`)
    /// and closes the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.close(event_loop);
    }

    /// Releases app resources, then the GPU context and window.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase == Phase::Closing {
            return;
        }
        if self.phase == Phase::Running {
            self.app.on_exit();
        }
        self.phase = Phase::Closing;
        self.entry = None;
        event_loop.exit();
    }

    /// Runs one full frame: timing, input dispatch, draw.
    fn frame(&mut self) -> AppControl {
        let time = self.clock.tick();
        self.app.on_update(&self.input, time);
        self.render()
    }

    fn render(&mut self) -> AppControl {
        match self.entry.as_mut() {
            Some(entry) => render_entry(&mut self.app, entry),
            None => AppControl::Continue,
        }
    }

    /// Resize handler: reconfigure, reproject, redraw immediately.
    fn resize(&mut self, new_size: PhysicalSize<u32>) -> AppControl {
        log::info!("window resize: {}x{}", new_size.width, new_size.height);

        let Some(entry) = self.entry.as_mut() else {
            return AppControl::Continue;
        };
        entry.with_gpu_mut(|gpu| gpu.resize(new_size));

        let viewport = Viewport::from_physical(new_size.width, new_size.height);
        redraw_after_resize(&mut self.app, viewport, |app| render_entry(app, entry))
    }
}

fn render_entry<A: CoreApp>(app: &mut A, entry: &mut WindowEntry) -> AppControl {
    entry.with_mut(|fields| {
        let mut ctx = FrameCtx {
            window: WindowCtx {
                window: fields.window,
            },
            gpu: fields.gpu,
        };
        app.on_render(&mut ctx)
    })
}

/// Reprojects and redraws right away, outside the frame loop: no clock tick
/// and no `on_update`. A zero-sized framebuffer skips both.
fn redraw_after_resize<A, F>(app: &mut A, viewport: Viewport, redraw: F) -> AppControl
where
    A: CoreApp,
    F: FnOnce(&mut A) -> AppControl,
{
    if !viewport.is_valid() {
        return AppControl::Continue;
    }

    app.on_resize(viewport);
    redraw(app)
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase != Phase::Starting {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e.context("initialization failed"));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase == Phase::Closing {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; presentation paces the loop.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.phase != Phase::Running {
            return;
        }

        if let Some(ev) = translate_input_event(&event) {
            self.input.apply_event(&ev);
        }

        let control = match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                log::info!("window close requested");
                self.close(event_loop);
                return;
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::RedrawRequested => self.frame(),

            _ => AppControl::Continue,
        };

        if control == AppControl::Exit {
            self.fail(event_loop, anyhow::anyhow!("render loop aborted by a fatal surface error"));
        }
    }
}

fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
            })
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        // NativeKeyCode is not a u32 in winit 0.30; no stable numeric.
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FrameTime;

    /// Records lifecycle calls; rendering is simulated by the test's redraw.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl CoreApp for Recorder {
        fn on_init(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
            Ok(())
        }

        fn on_resize(&mut self, viewport: Viewport) {
            self.calls
                .push(format!("resize {}x{}", viewport.width, viewport.height));
        }

        fn on_update(&mut self, _input: &InputState, _time: FrameTime) {
            self.calls.push("update".to_string());
        }

        fn on_render(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }
    }

    fn redraw(app: &mut Recorder) -> AppControl {
        app.calls.push("render".to_string());
        AppControl::Continue
    }

    // ── resize ──

    #[test]
    fn resize_reprojects_then_redraws_without_update() {
        let mut app = Recorder::default();
        let control = redraw_after_resize(&mut app, Viewport::from_physical(800, 600), redraw);

        assert_eq!(control, AppControl::Continue);
        assert_eq!(app.calls, ["resize 800x600", "render"]);
    }

    #[test]
    fn zero_sized_resize_neither_reprojects_nor_redraws() {
        let mut app = Recorder::default();
        for (w, h) in [(0, 0), (0, 600), (800, 0)] {
            redraw_after_resize(&mut app, Viewport::from_physical(w, h), redraw);
        }
        assert!(app.calls.is_empty());
    }

    #[test]
    fn resize_forwards_a_fatal_redraw() {
        let mut app = Recorder::default();
        let control = redraw_after_resize(&mut app, Viewport::from_physical(640, 480), |_| {
            AppControl::Exit
        });
        assert_eq!(control, AppControl::Exit);
    }

    // ── key mapping ──

    #[test]
    fn maps_demo_keys_by_physical_position() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)), Key::ArrowUp);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
    }

    #[test]
    fn unmapped_keys_become_unknown() {
        assert!(matches!(
            map_key(PhysicalKey::Code(KeyCode::F5)),
            Key::Unknown(_)
        ));
    }

    #[test]
    fn default_window_matches_demo_size() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.initial_size, LogicalSize::new(1280.0, 720.0));
    }
}
