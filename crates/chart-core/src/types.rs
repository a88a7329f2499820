// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, colors, fonts).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }
    pub fn width_f32(&self) -> f32 { self.width as f32 }
    pub fn height_f32(&self) -> f32 { self.height as f32 }
}

impl Default for Size {
    fn default() -> Self { Self::new(WIDTH, HEIGHT) }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
    SansSerif,
    /// Tabular digits, used for price labels.
    Monospace,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f32,
    pub family: FontFamily,
}

impl Font {
    pub const fn new(size: f32, family: FontFamily) -> Self { Self { size, family } }
}

impl Default for Font {
    fn default() -> Self { Self::new(12.0, FontFamily::SansSerif) }
}
