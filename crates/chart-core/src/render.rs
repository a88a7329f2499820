// File: crates/chart-core/src/render.rs
// Summary: Frame orchestration: price range, culling, per-bar candles, and both axes.

use tracing::{debug, warn};

use crate::axis::AxisRenderer;
use crate::config::{ChartConfig, PriceRangeMode};
use crate::error::ChartResult;
use crate::format::{ChronoDateFormatter, DateFormatter, PriceFormatter};
use crate::geometry::{Point, Rect};
use crate::scale::PriceScale;
use crate::series::{Bar, Direction, PriceRange};
use crate::surface::Surface;
use crate::theme::{self, Theme};
use crate::view::Viewport;

/// What a draw call produced, for callers and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub bars_drawn: usize,
    pub bars_culled: usize,
    pub price_ticks: usize,
    pub date_ticks: usize,
    pub price_range: Option<PriceRange>,
}

/// Pixel geometry of one candle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub wick_x: f32,
    pub high_y: f32,
    pub low_y: f32,
    pub body: Rect,
    pub direction: Direction,
}

impl CandleGeometry {
    /// Zero-height bodies are widened to 1px so a doji still shows.
    pub fn compute(bar: &Bar, x: f32, bar_width: f32, scale: &PriceScale) -> Self {
        let open_y = scale.to_y(bar.open);
        let close_y = scale.to_y(bar.close);
        let top = open_y.min(close_y);
        let bottom = open_y.max(close_y).max(top + 1.0);
        Self {
            wick_x: x + bar_width * 0.5,
            high_y: scale.to_y(bar.high),
            low_y: scale.to_y(bar.low),
            body: Rect::from_ltrb(x, top, x + bar_width, bottom),
            direction: bar.direction(),
        }
    }
}

pub struct ChartRenderer {
    pub axes: AxisRenderer,
    pub theme: Theme,
    pub price_range_mode: PriceRangeMode,
    price_fmt: PriceFormatter,
    date_fmt: Box<dyn DateFormatter>,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            axes: AxisRenderer::new(config.price_ticks, config.date_label_stride, config.label_font_size),
            theme: theme::find(&config.theme),
            price_range_mode: config.price_range,
            price_fmt: PriceFormatter::new(config.price_decimals),
            date_fmt: Box::new(ChronoDateFormatter::new(config.date_format.clone())),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_date_formatter(mut self, fmt: impl DateFormatter + 'static) -> Self {
        self.date_fmt = Box::new(fmt);
        self
    }

    /// Price range for the current frame per `price_range_mode`. Falls back to
    /// the whole series when no bar is in view.
    pub fn price_range(&self, bars: &[Bar], viewport: &Viewport) -> Option<PriceRange> {
        match self.price_range_mode {
            PriceRangeMode::All => PriceRange::of(bars),
            PriceRangeMode::Visible => {
                let visible = viewport.visible_range();
                let end = visible.end.min(bars.len());
                let start = visible.start.min(end);
                PriceRange::of(&bars[start..end]).or_else(|| PriceRange::of(bars))
            }
        }
    }

    /// Render one full frame. The visible window is derived from `bars.len()`
    /// and the surface width, whatever extent `viewport` last saw.
    ///
    /// Errors only when the surface cannot begin a frame; in that case no
    /// draw call is issued.
    pub fn draw(&self, bars: &[Bar], viewport: &Viewport, surface: &mut dyn Surface) -> ChartResult<RenderStats> {
        if let Err(e) = surface.begin_frame() {
            warn!(error = %e, "skipping frame");
            return Err(e);
        }
        let size = surface.size();
        let mut viewport = *viewport;
        viewport.set_extent(bars.len(), size.width_f32());
        let full = Rect::from_ltwh(0.0, 0.0, size.width_f32(), size.height_f32());
        surface.clear(full, self.theme.background);

        let Some(range) = self.price_range(bars, &viewport) else {
            debug!("empty series, surface cleared");
            return Ok(RenderStats::default());
        };
        let scale = PriceScale::from_range(range, size.height_f32());

        let price_ticks = self.axes.price_ticks(range, size.height_f32(), &self.price_fmt);
        self.axes.draw_price_axis(surface, &price_ticks, size, &self.theme);

        let visible = viewport.visible_range();
        let mut drawn = 0usize;
        for i in visible.start..visible.end.min(bars.len()) {
            let x = viewport.bar_pixel_x(i);
            if !(x >= 0.0 && x < size.width_f32()) {
                continue;
            }
            self.draw_candle(surface, &bars[i], x, viewport.bar_width(), &scale);
            drawn += 1;
        }

        let date_ticks = self.axes.date_ticks(bars, &viewport, size.width_f32(), self.date_fmt.as_ref());
        self.axes.draw_date_axis(surface, &date_ticks, size, &self.theme);

        let stats = RenderStats {
            bars_drawn: drawn,
            bars_culled: bars.len() - drawn,
            price_ticks: price_ticks.len(),
            date_ticks: date_ticks.len(),
            price_range: Some(range),
        };
        debug!(
            bars_drawn = stats.bars_drawn,
            bars_culled = stats.bars_culled,
            min_price = range.min,
            max_price = range.max,
            "frame rendered"
        );
        Ok(stats)
    }

    fn draw_candle(&self, surface: &mut dyn Surface, bar: &Bar, x: f32, bar_width: f32, scale: &PriceScale) {
        let g = CandleGeometry::compute(bar, x, bar_width, scale);
        surface.draw_line(Point::new(g.wick_x, g.high_y), Point::new(g.wick_x, g.low_y), self.theme.wick);
        let color = match g.direction {
            Direction::Bullish => self.theme.candle_up,
            Direction::Bearish => self.theme.candle_down,
        };
        surface.fill_rect(g.body, color);
    }
}

impl Default for ChartRenderer {
    fn default() -> Self { Self::new(&ChartConfig::default()) }
}
