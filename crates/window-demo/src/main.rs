// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: wheel pans, Ctrl+wheel zooms, T/Space cycles the theme. CPU frames via winit + softbuffer.

use anyhow::{Context, Result};
use chart_core::{theme, BarProvider, Chart, ChartConfig, CsvFileProvider, JsonFileProvider, Surface, WheelEvent};
use chart_render_skia::SkiaSurface;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use winit::event::{ElementState, Event, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Browser-style pixels per wheel line.
const LINE_DELTA_PX: f64 = 100.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string());
    let path = resolve_path_simple(&raw);
    let bars = provider_for(&path)
        .fetch()
        .with_context(|| format!("failed to load bars from '{}'", path.display()))?;
    if bars.is_empty() {
        anyhow::bail!("no bars loaded");
    }
    info!(bars = bars.len(), path = %path.display(), "loaded bars");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Candlestick Chart — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut frame_buffer = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    let surface = SkiaSurface::new(size.width.max(1), size.height.max(1))?;
    let mut chart = Chart::new(surface, ChartConfig::default())?;
    chart.set_bars(bars);

    let themes = theme::presets();
    let mut theme_idx = 0usize;
    let mut zoom_modifier = false;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    let (w, h) = (new_size.width.max(1), new_size.height.max(1));
                    if let Err(e) = chart.surface_mut().resize(w, h) {
                        error!(error = %e, "resize failed");
                        return;
                    }
                    chart.resize();
                    window.request_redraw();
                }
                WindowEvent::ModifiersChanged(m) => zoom_modifier = m.ctrl(),
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit: positive y = away from the user; wheel events here use browser sign
                    let delta_y = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_DELTA_PX,
                        MouseScrollDelta::PixelDelta(p) => -p.y,
                    };
                    if delta_y == 0.0 {
                        return;
                    }
                    if let Err(e) = chart.on_wheel(WheelEvent { delta_y, zoom_modifier }) {
                        error!(error = %e, "wheel redraw failed");
                    }
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. }
                    if input.state == ElementState::Pressed && is_theme_key(input.virtual_keycode) =>
                {
                    theme_idx = (theme_idx + 1) % themes.len();
                    chart.set_theme(themes[theme_idx]);
                    info!(theme = themes[theme_idx].name, "theme switched");
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut chart, &mut frame_buffer) {
                    error!(error = %e, "present failed");
                }
            }
            _ => {}
        }
    });
}

/// Draw the chart and blit its RGBA pixels into the window buffer (0RGB u32).
fn present(chart: &mut Chart<SkiaSurface>, frame_buffer: &mut softbuffer::Surface) -> Result<()> {
    chart.draw()?;
    let size = chart.surface().size();
    let (w, h) = (
        NonZeroU32::new(size.width).context("zero width")?,
        NonZeroU32::new(size.height).context("zero height")?,
    );
    frame_buffer.resize(w, h).map_err(|e| anyhow::anyhow!("softbuffer resize: {e}"))?;

    let rgba = chart.surface_mut().to_rgba8()?;
    let mut frame = frame_buffer.buffer_mut().map_err(|e| anyhow::anyhow!("softbuffer buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// T or Space cycles the theme; modifier keys do not.
fn is_theme_key(key: Option<VirtualKeyCode>) -> bool {
    matches!(key, Some(VirtualKeyCode::T | VirtualKeyCode::Space))
}

fn provider_for(path: &Path) -> Box<dyn BarProvider> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("json") => Box::new(JsonFileProvider::new(path)),
        _ => Box::new(CsvFileProvider::new(path)),
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path_simple(raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.exists() { return p.to_path_buf(); }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() { return alt; }
    }
    p.to_path_buf()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() { "cvs" => { alt.set_extension("csv"); Some(alt) }, "csv" => { alt.set_extension("cvs"); Some(alt) }, _ => None }
}
