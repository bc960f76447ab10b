/// Framebuffer size in physical pixels.
///
/// Applications build their projection from this; it changes on every resize.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Center of the framebuffer, `(width / 2, height / 2)`.
    #[inline]
    pub fn center(self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
