/// A single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one.
/// Hand it back to `Gpu::submit` as soon as recording is done.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
