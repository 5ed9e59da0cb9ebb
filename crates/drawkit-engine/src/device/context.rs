use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use winit::window::Window;

use crate::chain::{RenderFailure, RenderResult};
use crate::registry::ContextId;

use super::GpuConfig;

/// Live wgpu context bound to one window.
///
/// Owns everything that does not depend on the drawable size, so it survives
/// resizes unless the device reports loss.
pub struct WgpuContext {
    id: ContextId,

    /// Window surface. Owning an `Arc<Window>` makes it `'static`.
    surface: wgpu::Surface<'static>,

    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Set from the device-lost callback.
    lost: Arc<AtomicBool>,
}

impl WgpuContext {
    /// Creates instance, surface, adapter and device for `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn request(window: Arc<Window>, config: &GpuConfig) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: config.backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| RenderFailure::context(format!("failed to create wgpu surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: config.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderFailure::context(format!("no suitable GPU adapter: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("drawkit device"),
                required_features: config.required_features,
                required_limits: config.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RenderFailure::context(format!("failed to create device/queue: {e}")))?;

        let lost = Arc::new(AtomicBool::new(false));
        let flag = lost.clone();
        device.set_device_lost_callback(move |reason, message| {
            if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
                log::debug!("wgpu device destroyed");
                return;
            }
            log::warn!("wgpu device lost ({reason:?}): {message}");
            flag.store(true, Ordering::Release);
        });

        Ok(Self {
            id: ContextId::next(),
            surface,
            adapter,
            device,
            queue,
            lost,
        })
    }

    #[inline]
    pub fn id(&self) -> ContextId {
        self.id
    }

    #[inline]
    pub fn surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    #[inline]
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Whether the device reported loss since creation.
    #[inline]
    pub fn is_lost(&self) -> bool {
        self.lost.load(Ordering::Acquire)
    }

    pub(crate) fn destroy(self) {
        self.device.destroy();
    }
}
