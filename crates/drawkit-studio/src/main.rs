use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use winit::dpi::LogicalSize;

use drawkit_engine::device::{GpuConfig, WgpuCanvas};
use drawkit_engine::logging::{LoggingConfig, init_logging};
use drawkit_engine::manager::{Canvas, DrawManager, RasterDrawManager};
use drawkit_engine::paint::Color;
use drawkit_engine::raster::{RasterCanvas, SoftwareBackend};
use drawkit_engine::window::{Runtime, RuntimeConfig};
use drawkit_engine::Size;

enum Mode {
    Window { transparent: bool },
    Raster { out: PathBuf, size: Size },
}

fn parse_args() -> Result<Mode> {
    let mut args = std::env::args().skip(1);
    let mut transparent = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--transparent" => transparent = true,
            "--raster" => {
                let out = args.next().context("--raster needs an output path")?;
                return Ok(Mode::Raster {
                    out: PathBuf::from(out),
                    size: Size::new(320, 200),
                });
            }
            other => bail!("unknown argument `{other}` (expected --transparent or --raster <out.png>)"),
        }
    }

    Ok(Mode::Window { transparent })
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    match parse_args()? {
        Mode::Window { transparent } => run_window(transparent),
        Mode::Raster { out, size } => render_raster(&out, size),
    }
}

/// Opens a window and pulses the clear color, one step per frame.
fn run_window(transparent: bool) -> Result<()> {
    let config = RuntimeConfig {
        title: "drawkit studio".to_string(),
        initial_size: LogicalSize::new(820.0, 560.0),
        transparent,
        clear_color: if transparent {
            Color::TRANSPARENT
        } else {
            Color::from_argb(0xFF10_1418)
        },
        ..Default::default()
    };

    let gpu = GpuConfig {
        present_mode: wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };

    let mut frame: u64 = 0;
    Runtime::run(config, gpu, move |canvas: &mut WgpuCanvas| {
        frame = frame.wrapping_add(1);
        let t = (frame % 240) as f32 / 240.0;
        let level = 0.5 - 0.5 * (t * std::f32::consts::TAU).cos();
        canvas.clear(Color::from_straight(0.1, 0.2 + 0.5 * level, 0.4, 1.0));
        if frame % 600 == 0 {
            log::debug!("frame {frame} at {}", canvas.size());
        }
    })
}

/// Draws one frame on the CPU and writes it as PNG.
fn render_raster(out: &Path, size: Size) -> Result<()> {
    let mut manager = RasterDrawManager::new(SoftwareBackend::new(), size, |canvas: &mut RasterCanvas| {
        let Size { width, height } = canvas.size();
        let (w, h) = (width as f32, height as f32);
        canvas.fill_rect(w * 0.1, h * 0.1, w * 0.35, h * 0.8, Color::from_argb(0xFFE0_6C3C));
        canvas.fill_rect(w * 0.55, h * 0.1, w * 0.35, h * 0.8, Color::from_argb(0x8038_80E0));
    });
    manager.set_clear_color(Color::WHITE);

    manager.initiate().context("failed to create raster canvas")?;
    log::info!("{}", manager.renderer_info().trim_end().replace('\n', ", "));
    manager.draw();

    let result = match manager.canvas() {
        Some(canvas) => canvas.save_png(out),
        None => Err(anyhow::anyhow!("raster canvas vanished before save")),
    };
    manager.dispose();
    result?;

    log::info!("wrote {}", out.display());
    Ok(())
}
