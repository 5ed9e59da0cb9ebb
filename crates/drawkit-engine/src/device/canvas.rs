use crate::chain::Size;
use crate::manager::Canvas;
use crate::paint::Color;

use super::{WgpuContext, WgpuSurface};

/// Canvas recording GPU work into the offscreen surface.
///
/// Commands accumulate in one encoder until the manager flushes.
pub struct WgpuCanvas {
    device: wgpu::Device,
    queue: wgpu::Queue,
    view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    size: Size,
    encoder: Option<wgpu::CommandEncoder>,
}

/// Borrowed handles for issuing draw commands against the canvas.
pub struct FramePass<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
    pub format: wgpu::TextureFormat,
    pub size: Size,
}

impl WgpuCanvas {
    pub(crate) fn new(context: &WgpuContext, surface: &WgpuSurface) -> Self {
        Self {
            device: context.device().clone(),
            queue: context.queue().clone(),
            view: surface.view().clone(),
            format: surface.texture().format(),
            size: surface.size(),
            encoder: None,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Handles for the current frame. Opens an encoder if none is pending.
    pub fn pass(&mut self) -> FramePass<'_> {
        let device = &self.device;
        let encoder = self.encoder.get_or_insert_with(|| {
            device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("drawkit canvas encoder"),
            })
        });
        FramePass {
            device,
            queue: &self.queue,
            encoder,
            view: &self.view,
            format: self.format,
            size: self.size,
        }
    }

    /// Whether commands were recorded since the last flush.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.encoder.is_some()
    }

    /// Closes the pending encoder.
    pub(crate) fn finish(&mut self) -> Option<wgpu::CommandBuffer> {
        self.encoder.take().map(|e| e.finish())
    }
}

impl Canvas for WgpuCanvas {
    fn clear(&mut self, color: Color) {
        let pass = self.pass();
        let _rpass = pass.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("drawkit clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: pass.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}
