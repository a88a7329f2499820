// File: crates/chart-core/src/scale.rs
// Summary: Vertical price scale mapping a price range onto an inverted pixel axis.

use crate::series::PriceRange;

/// Maps prices in `[min, max]` to `[height, 0]` pixels (higher price, smaller y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
    pub height_px: f32,
}

impl PriceScale {
    pub fn new(min: f64, max: f64, height_px: f32) -> Self {
        Self { min, max, height_px }
    }

    pub fn from_range(range: PriceRange, height_px: f32) -> Self {
        Self::new(range.min, range.max, height_px)
    }

    /// A zero-width range has no slope; every price sits at mid-height.
    #[inline]
    pub fn is_flat(&self) -> bool {
        (self.max - self.min).abs() < 1e-12
    }

    #[inline]
    pub fn to_y(&self, price: f64) -> f32 {
        if self.is_flat() {
            return self.height_px * 0.5;
        }
        let frac = (price - self.min) / (self.max - self.min);
        self.height_px - (frac as f32) * self.height_px
    }

    /// Inverse of `to_y`. A flat scale maps every pixel back to `min`.
    #[inline]
    pub fn y_to_price(&self, y: f32) -> f64 {
        if self.is_flat() || self.height_px <= 0.0 {
            return self.min;
        }
        let frac = ((self.height_px - y) / self.height_px) as f64;
        self.min + frac * (self.max - self.min)
    }
}
