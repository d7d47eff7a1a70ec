use crate::window::MAX_SAMPLES;

/// Picks the effective MSAA sample count.
///
/// `0` and `1` mean no multisampling. Otherwise the result is the largest
/// power of two not above `requested` (capped at [`MAX_SAMPLES`]) for which
/// `supported` holds, falling back to `1`.
pub fn choose_sample_count(requested: u32, supported: impl Fn(u32) -> bool) -> u32 {
    if requested <= 1 {
        return 1;
    }

    let capped = requested.min(MAX_SAMPLES);
    let mut count = 1 << (u32::BITS - 1 - capped.leading_zeros());
    while count > 1 {
        if supported(count) {
            return count;
        }
        count /= 2;
    }
    1
}

/// Multisampled color target matching the surface configuration.
///
/// Rendered into each frame and resolved into the swapchain image.
pub(crate) struct MsaaTarget {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("spacecraft msaa color target"),
            size: wgpu::Extent3d {
                width: config.width.max(1),
                height: config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { _texture: texture, view }
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
