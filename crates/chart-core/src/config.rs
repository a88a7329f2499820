// File: crates/chart-core/src/config.rs
// Summary: Static chart configuration (zoom bounds, input steps, axis cadence, labels) with validation.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which bars feed the vertical price range on each draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRangeMode {
    /// Only bars currently scrolled into view; the scale follows panning.
    #[default]
    Visible,
    /// Every bar in the series; the scale stays fixed while panning.
    All,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Initial pixels per bar.
    pub bar_width: f32,
    pub min_bar_width: f32,
    pub max_bar_width: f32,
    /// Pixels moved per pan wheel notch.
    pub pan_step: f32,
    /// Bar-width pixels changed per zoom wheel notch.
    pub zoom_step: i32,
    /// Number of intervals on the price axis (ticks = intervals + 1).
    pub price_ticks: usize,
    /// Label every Nth bar on the date axis.
    pub date_label_stride: usize,
    pub price_decimals: usize,
    /// strftime pattern for date labels, applied in UTC.
    pub date_format: String,
    pub label_font_size: f32,
    pub price_range: PriceRangeMode,
    /// Theme preset name, see `theme::find`.
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width: 5.0,
            min_bar_width: 2.0,
            max_bar_width: 20.0,
            pan_step: 20.0,
            zoom_step: 1,
            price_ticks: 10,
            date_label_stride: 50,
            price_decimals: 2,
            date_format: "%d/%m/%y".to_string(),
            label_font_size: 12.0,
            price_range: PriceRangeMode::Visible,
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(text: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ChartError::InvalidConfig(format!("parse: {e}")))?;
        config.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        let widths = [self.bar_width, self.min_bar_width, self.max_bar_width];
        if widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(ChartError::InvalidConfig("bar widths must be finite and > 0".to_owned()));
        }
        if self.min_bar_width > self.max_bar_width {
            return Err(ChartError::InvalidConfig(format!(
                "min_bar_width {} exceeds max_bar_width {}",
                self.min_bar_width, self.max_bar_width
            )));
        }
        if !self.pan_step.is_finite() || self.pan_step <= 0.0 {
            return Err(ChartError::InvalidConfig("pan_step must be finite and > 0".to_owned()));
        }
        if self.zoom_step <= 0 {
            return Err(ChartError::InvalidConfig("zoom_step must be > 0".to_owned()));
        }
        if self.price_ticks == 0 {
            return Err(ChartError::InvalidConfig("price_ticks must be > 0".to_owned()));
        }
        if self.date_label_stride == 0 {
            return Err(ChartError::InvalidConfig("date_label_stride must be > 0".to_owned()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChartError::InvalidConfig(format!("invalid date_format '{}'", self.date_format)));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(ChartError::InvalidConfig("label_font_size must be finite and > 0".to_owned()));
        }
        Ok(self)
    }
}
