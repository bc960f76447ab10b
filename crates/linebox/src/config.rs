//! Demo constants and tunables.

use winit::dpi::LogicalSize;

use linebox_engine::window::RuntimeConfig;

pub const WINDOW_TITLE: &str = "linebox: square outline transform demo";
pub const WINDOW_WIDTH: f64 = 1280.0;
pub const WINDOW_HEIGHT: f64 = 720.0;

/// Side length of the square outline, in pixels.
pub const SQUARE_LENGTH: f32 = 100.0;

/// How fast held keys transform the shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Speeds {
    /// Degrees per second.
    pub rotation_deg_per_sec: f32,
    /// Pixels per second.
    pub translation_px_per_sec: f32,
    /// Scale factor change per second (1.0 = 100%).
    pub scale_per_sec: f32,
}

impl Default for Speeds {
    fn default() -> Self {
        Self {
            rotation_deg_per_sec: 90.0,
            translation_px_per_sec: 200.0,
            scale_per_sec: 1.0,
        }
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
    }
}
