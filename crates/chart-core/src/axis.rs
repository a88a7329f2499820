// File: crates/chart-core/src/axis.rs
// Summary: Price and date axis tick layout; pure functions from (bars, viewport, canvas) to ticks.

use crate::format::{DateFormatter, PriceFormatter};
use crate::geometry::Point;
use crate::grid::{linspace, stride_indices};
use crate::scale::PriceScale;
use crate::series::{Bar, PriceRange};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{Font, FontFamily, Size};
use crate::view::Viewport;

/// Price labels sit this far right of the left edge and above their gridline.
const PRICE_LABEL_INSET: f32 = 5.0;
/// Date labels start this far left of their gridline.
const DATE_LABEL_SHIFT: f32 = 20.0;
/// Date labels sit this far above the bottom edge.
const DATE_LABEL_BASELINE: f32 = 5.0;

/// One labeled gridline. `position` is y for the price axis, x for the date axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub label: String,
}

#[derive(Clone, Copy, Debug)]
pub struct AxisRenderer {
    /// Number of price intervals; `steps + 1` ticks.
    pub price_steps: usize,
    /// Label every Nth bar.
    pub date_stride: usize,
    pub font_size: f32,
}

impl Default for AxisRenderer {
    fn default() -> Self {
        Self { price_steps: 10, date_stride: 50, font_size: 12.0 }
    }
}

impl AxisRenderer {
    pub fn new(price_steps: usize, date_stride: usize, font_size: f32) -> Self {
        Self { price_steps: price_steps.max(1), date_stride: date_stride.max(1), font_size }
    }

    /// Evenly spaced price ticks from `range.min` to `range.max` inclusive.
    /// A flat range yields a single tick at mid-height.
    pub fn price_ticks(&self, range: PriceRange, height: f32, fmt: &PriceFormatter) -> Vec<Tick> {
        let scale = PriceScale::from_range(range, height);
        if scale.is_flat() {
            return vec![Tick { position: scale.to_y(range.min), label: fmt.format(range.min) }];
        }
        linspace(range.min, range.max, self.price_steps)
            .into_iter()
            .map(|price| Tick { position: scale.to_y(price), label: fmt.format(price) })
            .collect()
    }

    /// Ticks at every `date_stride`-th bar whose center lies in `[0, canvas_width)`.
    pub fn date_ticks(&self, bars: &[Bar], viewport: &Viewport, canvas_width: f32, fmt: &dyn DateFormatter) -> Vec<Tick> {
        // bars whose center can be on screen: left edge up to half a bar off-canvas
        let half = viewport.bar_width() * 0.5;
        let first = ((-viewport.offset_x() - half) / viewport.bar_width()).floor().max(0.0) as usize;
        let end = (((canvas_width - viewport.offset_x()) / viewport.bar_width()).ceil().max(0.0) as usize + 1)
            .min(bars.len());
        stride_indices(first.min(end)..end, self.date_stride)
            .filter_map(|i| {
                let x = viewport.bar_center_x(i);
                (x >= 0.0 && x < canvas_width).then(|| Tick { position: x, label: fmt.format(bars[i].time) })
            })
            .collect()
    }

    /// Horizontal gridline across the canvas plus a label above it, per tick.
    pub fn draw_price_axis(&self, surface: &mut dyn Surface, ticks: &[Tick], size: Size, theme: &Theme) {
        let font = Font::new(self.font_size, FontFamily::Monospace);
        for tick in ticks {
            let y = tick.position;
            surface.draw_line(Point::new(0.0, y), Point::new(size.width_f32(), y), theme.grid);
            surface.draw_text(&tick.label, Point::new(PRICE_LABEL_INSET, y - PRICE_LABEL_INSET), &font, theme.axis_label);
        }
    }

    /// Vertical gridline down the canvas plus a label near the bottom, per tick.
    pub fn draw_date_axis(&self, surface: &mut dyn Surface, ticks: &[Tick], size: Size, theme: &Theme) {
        let font = Font::new(self.font_size, FontFamily::SansSerif);
        let h = size.height_f32();
        for tick in ticks {
            let x = tick.position;
            surface.draw_text(&tick.label, Point::new(x - DATE_LABEL_SHIFT, h - DATE_LABEL_BASELINE), &font, theme.axis_label);
            surface.draw_line(Point::new(x, 0.0), Point::new(x, h), theme.grid);
        }
    }
}
