// File: crates/chart-core/src/view.rs
// Summary: Viewport state (bar width + horizontal pixel offset) and the bar-index/price to pixel mapping.

use std::ops::Range;

use tracing::trace;

use crate::config::ChartConfig;
use crate::geometry::clamp;
use crate::scale::PriceScale;

/// Mutable mapping from (bar index, price) to pixels.
///
/// Invariants, restored after every mutation:
/// - `min_bar_width <= bar_width <= max_bar_width`
/// - `max_offset() <= offset_x <= 0`
///
/// The offset bound depends on the bar count and canvas width, which the
/// viewport tracks through `set_extent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    bar_width: f32,
    min_bar_width: f32,
    max_bar_width: f32,
    offset_x: f32,
    bar_count: usize,
    canvas_width: f32,
}

impl Viewport {
    pub fn new(bar_width: f32, min_bar_width: f32, max_bar_width: f32) -> Self {
        let (lo, hi) = if min_bar_width <= max_bar_width {
            (min_bar_width, max_bar_width)
        } else {
            (max_bar_width, min_bar_width)
        };
        Self {
            bar_width: clamp(bar_width, lo, hi),
            min_bar_width: lo,
            max_bar_width: hi,
            offset_x: 0.0,
            bar_count: 0,
            canvas_width: 0.0,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.bar_width, config.min_bar_width, config.max_bar_width)
    }

    pub fn bar_width(&self) -> f32 { self.bar_width }
    pub fn min_bar_width(&self) -> f32 { self.min_bar_width }
    pub fn max_bar_width(&self) -> f32 { self.max_bar_width }
    pub fn offset_x(&self) -> f32 { self.offset_x }
    pub fn bar_count(&self) -> usize { self.bar_count }
    pub fn canvas_width(&self) -> f32 { self.canvas_width }

    /// Total pixel width of all bars at the current zoom.
    pub fn content_width(&self) -> f32 {
        self.bar_count as f32 * self.bar_width
    }

    /// Most negative allowed offset; 0 when the content is narrower than the canvas.
    pub fn max_offset(&self) -> f32 {
        (self.canvas_width - self.content_width()).min(0.0)
    }

    /// Update the content/canvas extent and re-clamp the offset against it.
    pub fn set_extent(&mut self, bar_count: usize, canvas_width: f32) {
        self.bar_count = bar_count;
        self.canvas_width = canvas_width.max(0.0);
        self.clamp_offset();
    }

    /// Left edge of bar `index` in pixels.
    #[inline]
    pub fn bar_pixel_x(&self, index: usize) -> f32 {
        index as f32 * self.bar_width + self.offset_x
    }

    /// Horizontal center of bar `index` in pixels.
    #[inline]
    pub fn bar_center_x(&self, index: usize) -> f32 {
        self.bar_pixel_x(index) + self.bar_width * 0.5
    }

    /// Bar whose horizontal span contains pixel `x`, if any.
    pub fn index_at_x(&self, x: f32) -> Option<usize> {
        let logical = ((x - self.offset_x) / self.bar_width).floor();
        if logical < 0.0 || !logical.is_finite() {
            return None;
        }
        let index = logical as usize;
        (index < self.bar_count).then_some(index)
    }

    /// `height - ((price - min) / (max - min)) * height`, mid-height for a flat range.
    #[inline]
    pub fn price_to_y(price: f64, min_price: f64, max_price: f64, canvas_height: f32) -> f32 {
        PriceScale::new(min_price, max_price, canvas_height).to_y(price)
    }

    /// Indices whose left edge falls within `[0, canvas_width)`.
    ///
    /// Computed directly from the offset and bar width, so callers never
    /// scan bars outside the window.
    pub fn visible_range(&self) -> Range<usize> {
        if self.bar_count == 0 || self.canvas_width <= 0.0 {
            return 0..0;
        }
        let first = (-self.offset_x / self.bar_width).ceil().max(0.0);
        let end = ((self.canvas_width - self.offset_x) / self.bar_width).ceil().max(0.0);
        let mut start = (first as usize).min(self.bar_count);
        // float rounding at the edges; settle with the exact predicate
        while start > 0 && self.is_x_visible(self.bar_pixel_x(start - 1)) {
            start -= 1;
        }
        while start < self.bar_count && self.bar_pixel_x(start) < 0.0 {
            start += 1;
        }
        let mut end = (end as usize).clamp(start, self.bar_count);
        while end > start && !self.is_x_visible(self.bar_pixel_x(end - 1)) {
            end -= 1;
        }
        while end < self.bar_count && self.is_x_visible(self.bar_pixel_x(end)) {
            end += 1;
        }
        start..end
    }

    #[inline]
    pub fn is_x_visible(&self, x: f32) -> bool {
        x >= 0.0 && x < self.canvas_width
    }

    /// Shift content horizontally by `delta_px`, clamped to `[max_offset, 0]`.
    pub fn pan(&mut self, delta_px: f32) {
        let before = self.offset_x;
        self.offset_x = clamp(self.offset_x + delta_px, self.max_offset(), 0.0);
        trace!(delta_px, before, after = self.offset_x, "viewport pan");
    }

    /// Change bar width by `delta_steps` pixels, clamped to the width bounds,
    /// then re-clamp the offset against the new content width.
    pub fn zoom(&mut self, delta_steps: i32) {
        let before = self.bar_width;
        self.bar_width = clamp(self.bar_width + delta_steps as f32, self.min_bar_width, self.max_bar_width);
        self.clamp_offset();
        trace!(delta_steps, before, after = self.bar_width, offset_x = self.offset_x, "viewport zoom");
    }

    fn clamp_offset(&mut self) {
        self.offset_x = clamp(self.offset_x, self.max_offset(), 0.0);
    }
}

impl Default for Viewport {
    fn default() -> Self { Self::from_config(&ChartConfig::default()) }
}
