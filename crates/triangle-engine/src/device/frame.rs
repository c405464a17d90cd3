/// Render target and command encoder for a single frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one, so
/// pass it to [`Gpu::submit`](super::Gpu::submit) as soon as encoding is done.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
