use super::helpers;
use wgpu;

/// Offscreen color targets for the frame pipeline.
///
/// - `hdr_a` / `hdr_b` hold full-resolution scene color in Rgba16Float; the
///   chain bounces between them.
/// - `bloom_a` / `bloom_b` are half-resolution ping-pong buffers for the
///   bright pass and separable blur.
/// - `trail_a` / `trail_b` carry the feedback history between frames.
/// - `ldr` receives the tonemapped image for the antialiasing pass.
pub(crate) struct RenderTargets {
    pub(crate) hdr_a: wgpu::Texture,
    pub(crate) hdr_a_view: wgpu::TextureView,
    pub(crate) hdr_b: wgpu::Texture,
    pub(crate) hdr_b_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) trail_a: wgpu::Texture,
    pub(crate) trail_a_view: wgpu::TextureView,
    pub(crate) trail_b: wgpu::Texture,
    pub(crate) trail_b_view: wgpu::TextureView,
    pub(crate) ldr: wgpu::Texture,
    pub(crate) ldr_view: wgpu::TextureView,
}

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const LDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

const USAGE: wgpu::TextureUsages = wgpu::TextureUsages::RENDER_ATTACHMENT
    .union(wgpu::TextureUsages::TEXTURE_BINDING);

impl RenderTargets {
    pub(crate) fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (hdr_a, hdr_a_view) =
            helpers::create_color_texture(device, "hdr_a", width, height, HDR_FORMAT, USAGE);
        let (hdr_b, hdr_b_view) =
            helpers::create_color_texture(device, "hdr_b", width, height, HDR_FORMAT, USAGE);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, USAGE);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, USAGE);
        let (trail_a, trail_a_view) =
            helpers::create_color_texture(device, "trail_a", width, height, HDR_FORMAT, USAGE);
        let (trail_b, trail_b_view) =
            helpers::create_color_texture(device, "trail_b", width, height, HDR_FORMAT, USAGE);
        let (ldr, ldr_view) =
            helpers::create_color_texture(device, "ldr", width, height, LDR_FORMAT, USAGE);
        Self {
            hdr_a,
            hdr_a_view,
            hdr_b,
            hdr_b_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
            trail_a,
            trail_a_view,
            trail_b,
            trail_b_view,
            ldr,
            ldr_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::create(device, width, height);
    }
}
