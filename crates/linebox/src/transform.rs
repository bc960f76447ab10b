//! Model/view/projection state of the on-screen shape.

use glam::{Mat4, Vec3, Vec4};

use linebox_engine::coords::Viewport;
use linebox_engine::render::LineUniforms;

/// Everything the renderer needs to place and color the shape.
///
/// Model operations always right-multiply onto the current model matrix, so
/// the pose is the product of every transform applied since startup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    pub model: Mat4,
    /// Held at identity.
    pub view: Mat4,
    pub projection: Mat4,
    /// Straight RGBA in `[0, 1]`.
    pub color: Vec4,
}

impl TransformState {
    /// Initial state for a framebuffer: shape at the center, pixel projection,
    /// opaque white.
    pub fn new(viewport: Viewport) -> Self {
        let (cx, cy) = viewport.center();
        Self {
            model: Mat4::from_translation(Vec3::new(cx, cy, 0.0)),
            view: Mat4::IDENTITY,
            projection: pixel_projection(viewport),
            color: Vec4::ONE,
        }
    }

    /// Replaces the projection for a new framebuffer size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.projection = pixel_projection(viewport);
    }

    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    pub fn uniforms(&self) -> LineUniforms {
        LineUniforms::new(self.mvp(), self.color)
    }
}

/// Orthographic box `[0, w] x [0, h] x [-1, 1]`, origin bottom-left.
pub fn pixel_projection(viewport: Viewport) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, viewport.width, 0.0, viewport.height, -1.0, 1.0)
}
