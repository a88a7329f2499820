// File: crates/chart-core/src/surface.rs
// Summary: Drawing capability the renderer issues calls against, plus a recording implementation.

use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, Rect};
use crate::types::{Color, Font, Size};

/// A 2D raster target. The chart owns no pixels; it only issues these calls.
pub trait Surface {
    fn size(&self) -> Size;

    /// Called once before any draw call of a frame. A backend whose drawing
    /// context is gone returns `SurfaceUnavailable` and receives no further
    /// calls for that frame.
    fn begin_frame(&mut self) -> ChartResult<()> {
        Ok(())
    }

    fn clear(&mut self, region: Rect, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// `at` is the text baseline origin.
    fn draw_text(&mut self, text: &str, at: Point, font: &Font, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size { (**self).size() }
    fn begin_frame(&mut self) -> ChartResult<()> { (**self).begin_frame() }
    fn clear(&mut self, region: Rect, color: Color) { (**self).clear(region, color) }
    fn draw_line(&mut self, from: Point, to: Point, color: Color) { (**self).draw_line(from, to, color) }
    fn fill_rect(&mut self, rect: Rect, color: Color) { (**self).fill_rect(rect, color) }
    fn draw_text(&mut self, text: &str, at: Point, font: &Font, color: Color) {
        (**self).draw_text(text, at, font, color)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { region: Rect, color: Color },
    Line { from: Point, to: Point, color: Color },
    FillRect { rect: Rect, color: Color },
    Text { text: String, at: Point, font: Font, color: Color },
}

/// Headless surface that records every call of the latest frame.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    available: bool,
    frames: usize,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { size: Size::new(width, height), available: true, frames: 0, commands: Vec::new() }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Size::new(width, height);
    }

    /// Simulate losing (or regaining) the drawing context.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Number of frames successfully begun.
    pub fn frames(&self) -> usize { self.frames }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), at)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size { self.size }

    fn begin_frame(&mut self) -> ChartResult<()> {
        if !self.available {
            return Err(ChartError::SurfaceUnavailable("recording surface detached".to_owned()));
        }
        self.commands.clear();
        self.frames += 1;
        Ok(())
    }

    fn clear(&mut self, region: Rect, color: Color) {
        self.commands.push(DrawCommand::Clear { region, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, at: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), at, font: *font, color });
    }
}
