// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the chart drawing surface with PNG/RGBA export.

pub mod text;

use anyhow::Result;
use chart_core::{ChartError, ChartResult, Color, Font, Point, Rect, Size, Surface};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn to_skia_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

/// Off-screen N32 raster surface the chart draws into.
pub struct SkiaSurface {
    surface: skia::Surface,
    size: Size,
    text: TextShaper,
    draw_labels: bool,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        Ok(Self {
            surface: Self::raster(width, height)?,
            size: Size::new(width, height),
            text: TextShaper::new(),
            draw_labels: true,
        })
    }

    /// Skip text; system fonts vary, so golden snapshots turn labels off.
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    fn raster(width: u32, height: u32) -> ChartResult<skia::Surface> {
        let dims = (width.max(1) as i32, height.max(1) as i32);
        skia::surfaces::raster_n32_premul(dims)
            .ok_or_else(|| ChartError::SurfaceUnavailable(format!("failed to create {width}x{height} raster surface")))
    }

    /// Replace the backing raster. Contents are lost until the next draw.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        if self.size == Size::new(width, height) {
            return Ok(());
        }
        self.surface = Self::raster(width, height)?;
        self.size = Size::new(width, height);
        debug!(width, height, "skia surface resized");
        Ok(())
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.size.width.max(1) as usize, self.size.height.max(1) as usize);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut px = vec![0u8; w * h * 4];
        if !self.surface.read_pixels(&info, &mut px, w * 4, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok(px)
    }

    fn stroke(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint.set_color(to_skia(color));
        paint
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> Size { self.size }

    fn clear(&mut self, region: Rect, color: Color) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(to_skia_rect(region), skia::ClipOp::Intersect, false);
        canvas.clear(to_skia(color));
        canvas.restore();
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let paint = Self::stroke(color);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point, font: &Font, color: Color) {
        if !self.draw_labels {
            return;
        }
        let canvas = self.surface.canvas();
        self.text.draw_baseline(canvas, text, at, font, to_skia(color));
    }
}
