// File: crates/chart-core/src/series.rs
// Summary: OHLC bar record and the ordered bar sequence owned by a chart.

use std::ops::Range;

use serde::Serialize;

use crate::error::BarError;

/// One OHLC price record for a fixed interval. `time` is epoch seconds.
///
/// Not `Deserialize`: decoded input goes through `try_new`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub time: i64,
}

/// Candle coloring class. A tie (close == open) is bearish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Bullish,
    Bearish,
}

impl Bar {
    /// Construct a bar enforcing `low <= min(open, close) <= max(open, close) <= high`.
    pub fn try_new(open: f64, high: f64, low: f64, close: f64, time: i64) -> Result<Self, BarError> {
        if !(open.is_finite() && high.is_finite() && low.is_finite() && close.is_finite()) {
            return Err(BarError::NonFinite);
        }
        let body_low = open.min(close);
        let body_high = open.max(close);
        if low > body_low {
            return Err(BarError::LowAboveBody { low, body_low });
        }
        if high < body_high {
            return Err(BarError::HighBelowBody { high, body_high });
        }
        Ok(Self { open, high, low, close, time })
    }

    /// Re-check the invariant, e.g. for a bar built as a struct literal.
    pub fn validate(&self) -> Result<(), BarError> {
        Self::try_new(self.open, self.high, self.low, self.close, self.time).map(|_| ())
    }

    pub fn direction(&self) -> Direction {
        if self.close > self.open { Direction::Bullish } else { Direction::Bearish }
    }

    pub fn body_low(&self) -> f64 { self.open.min(self.close) }
    pub fn body_high(&self) -> f64 { self.open.max(self.close) }
}

/// Closed price interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_flat(&self) -> bool { self.span().abs() < 1e-12 }

    /// `[min(low), max(high)]` over `bars`; `None` when empty.
    pub fn of(bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let init = Self { min: first.low, max: first.high };
        Some(bars[1..].iter().fold(init, |r, b| Self { min: r.min.min(b.low), max: r.max.max(b.high) }))
    }
}

/// Ordered bar sequence; index order is time order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new() -> Self { Self::default() }

    pub fn from_bars(bars: Vec<Bar>) -> Self { Self { bars } }

    pub fn len(&self) -> usize { self.bars.len() }

    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn as_slice(&self) -> &[Bar] { &self.bars }

    pub fn get(&self, index: usize) -> Option<&Bar> { self.bars.get(index) }

    /// Price range over the bars in `range`, clipped to the series length.
    pub fn price_range(&self, range: Range<usize>) -> Option<PriceRange> {
        let end = range.end.min(self.bars.len());
        let start = range.start.min(end);
        PriceRange::of(&self.bars[start..end])
    }

    pub fn full_price_range(&self) -> Option<PriceRange> { PriceRange::of(&self.bars) }
}

impl From<Vec<Bar>> for BarSeries {
    fn from(bars: Vec<Bar>) -> Self { Self::from_bars(bars) }
}
