use std::sync::Arc;

use winit::window::Window;

use crate::chain::{RenderResult, Size};
use crate::host::GraphicsApi;
use crate::manager::{FlushCtx, GpuBackend};
use crate::registry;

use super::surface::map_surface_error;
use super::{GpuConfig, SurfaceErrorAction, WgpuCanvas, WgpuContext, WgpuRenderTarget, WgpuSurface};

/// wgpu chain builder for one window.
pub struct WgpuBackend {
    window: Arc<Window>,
    config: GpuConfig,
    api: GraphicsApi,
}

impl WgpuBackend {
    pub fn new(window: Arc<Window>, config: GpuConfig) -> Self {
        Self {
            window,
            config,
            api: GraphicsApi::Unknown,
        }
    }

    #[inline]
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    #[inline]
    pub fn config(&self) -> &GpuConfig {
        &self.config
    }
}

impl GpuBackend for WgpuBackend {
    type Context = WgpuContext;
    type RenderTarget = WgpuRenderTarget;
    type Surface = WgpuSurface;
    type Canvas = WgpuCanvas;

    fn graphics_api(&self) -> GraphicsApi {
        self.api
    }

    fn adapter_info(&self, context: &WgpuContext) -> Option<String> {
        let info = context.adapter().get_info();
        Some(format!("{} ({:?})", info.name, info.backend))
    }

    fn init_context(&mut self) -> RenderResult<WgpuContext> {
        pollster::block_on(WgpuContext::request(self.window.clone(), &self.config))
    }

    fn on_direct_context_init(&mut self, context: &mut WgpuContext) {
        self.api = GraphicsApi::from_wgpu(context.adapter().get_info().backend);
        registry::register(context.id());
    }

    fn on_direct_context_dispose(&mut self, context: &mut WgpuContext) {
        registry::unregister(context.id());
    }

    fn init_backend_render_target(
        &mut self,
        context: &WgpuContext,
        size: Size,
    ) -> RenderResult<WgpuRenderTarget> {
        WgpuRenderTarget::configure(context, size, &self.config)
    }

    fn init_surface(
        &mut self,
        context: &WgpuContext,
        render_target: &WgpuRenderTarget,
    ) -> RenderResult<WgpuSurface> {
        WgpuSurface::create(context, render_target)
    }

    fn init_canvas(&mut self, context: &WgpuContext, surface: &WgpuSurface) -> RenderResult<WgpuCanvas> {
        Ok(WgpuCanvas::new(context, surface))
    }

    fn can_reuse_context(&self, context: &WgpuContext, _size: Size) -> bool {
        !context.is_lost()
    }

    fn flush(&mut self, frame: FlushCtx<'_, Self>) {
        let FlushCtx {
            context,
            render_target,
            surface,
            canvas,
        } = frame;

        let Some(commands) = canvas.and_then(|c| c.finish()) else {
            return;
        };

        let (Some(target), Some(surface)) = (render_target, surface) else {
            context.queue().submit(std::iter::once(commands));
            return;
        };

        let output = match context.surface().get_current_texture() {
            Ok(output) => output,
            Err(err) => {
                match map_surface_error(&err) {
                    SurfaceErrorAction::Reconfigure => {
                        log::debug!("surface {err:?}; reconfiguring");
                        target.reconfigure(context);
                    }
                    SurfaceErrorAction::SkipFrame => log::debug!("surface {err:?}; frame skipped"),
                    SurfaceErrorAction::Fatal => log::error!("surface acquisition failed: {err}"),
                }
                // Offscreen content still advances so the next present is current.
                context.queue().submit(std::iter::once(commands));
                return;
            }
        };

        let mut encoder = context
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("drawkit present"),
            });
        encoder.copy_texture_to_texture(
            surface.texture().as_image_copy(),
            output.texture.as_image_copy(),
            target.extent(),
        );

        context.queue().submit([commands, encoder.finish()]);
        self.window.pre_present_notify();
        output.present();
    }

    fn release_surface(&mut self, surface: WgpuSurface) {
        surface.destroy();
    }

    fn release_context(&mut self, context: WgpuContext) {
        context.destroy();
    }
}
