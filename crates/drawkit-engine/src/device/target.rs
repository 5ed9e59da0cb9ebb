use crate::chain::{RenderFailure, RenderResult, Size};
use crate::host::{self, HostOs};

use super::surface::{choose_alpha_mode, choose_surface_format, fits_texture_limit};
use super::{GpuConfig, WgpuContext};

/// Window surface configuration applied at a fixed size.
#[derive(Debug)]
pub struct WgpuRenderTarget {
    config: wgpu::SurfaceConfiguration,
}

impl WgpuRenderTarget {
    /// Negotiates format and alpha mode, then configures the context's surface.
    pub(crate) fn configure(context: &WgpuContext, size: Size, gpu: &GpuConfig) -> RenderResult<Self> {
        // wgpu reports oversized configurations through the device error sink, which panics.
        let limit = context.device().limits().max_texture_dimension_2d;
        if !fits_texture_limit(size, limit) {
            return Err(RenderFailure::render_target(format!(
                "{size} exceeds the device texture limit of {limit}"
            )));
        }

        let caps = context.surface().get_capabilities(context.adapter());

        let format = choose_surface_format(&caps.formats, gpu.prefer_srgb)
            .ok_or_else(|| RenderFailure::render_target("no supported surface formats"))?;

        if !caps.usages.contains(wgpu::TextureUsages::COPY_DST) {
            return Err(RenderFailure::render_target(
                "surface textures cannot be copy destinations",
            ));
        }

        let transparent = host::is_transparent_background(HostOs::current(), gpu.fullscreen, gpu.transparency);
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes, gpu.alpha_mode, transparent);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_DST,
            format,
            width: size.width,
            height: size.height,
            present_mode: gpu.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: gpu.desired_maximum_frame_latency,
        };

        context.surface().configure(context.device(), &config);
        log::debug!("surface configured: {format:?} {alpha_mode:?} {size}");

        Ok(Self { config })
    }

    /// Applies the stored configuration again, e.g. after the surface went stale.
    pub(crate) fn reconfigure(&self, context: &WgpuContext) {
        context.surface().configure(context.device(), &self.config);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub fn alpha_mode(&self) -> wgpu::CompositeAlphaMode {
        self.config.alpha_mode
    }

    pub(crate) fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.config.width,
            height: self.config.height,
            depth_or_array_layers: 1,
        }
    }
}

/// Offscreen color texture the canvas paints into.
#[derive(Debug)]
pub struct WgpuSurface {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: Size,
}

impl WgpuSurface {
    /// Sized from the render target, which already enforced the device limit.
    pub(crate) fn create(context: &WgpuContext, target: &WgpuRenderTarget) -> RenderResult<Self> {
        let size = target.size();
        debug_assert!(fits_texture_limit(
            size,
            context.device().limits().max_texture_dimension_2d
        ));

        let texture = context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("drawkit surface"),
            size: target.extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: target.format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self { texture, view, size })
    }

    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn destroy(self) {
        self.texture.destroy();
    }
}
