/// Represents a single acquired swapchain image.
///
/// Short-lived: holding the surface texture blocks acquisition of the next
/// frame, so submit it through [`Gpu::submit`](super::Gpu::submit) promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    /// View of the swapchain image. With MSAA enabled this is the resolve target.
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
