// File: crates/chart-core/src/format.rs
// Summary: Label formatting capabilities for the price and date axes.

use std::fmt::Write as _;

use chrono::DateTime;

/// Formats a bar timestamp (epoch seconds) into an axis label.
pub trait DateFormatter {
    fn format(&self, epoch_secs: i64) -> String;
}

/// UTC strftime-based date labels. Default pattern is day/month/2-digit year.
#[derive(Clone, Debug)]
pub struct ChronoDateFormatter {
    pattern: String,
}

impl ChronoDateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self { Self::new("%d/%m/%y") }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, epoch_secs: i64) -> String {
        let Some(dt) = DateTime::from_timestamp(epoch_secs, 0) else {
            return epoch_secs.to_string();
        };
        let mut out = String::new();
        // chrono reports bad patterns through fmt::Error
        if write!(out, "{}", dt.format(&self.pattern)).is_err() {
            return epoch_secs.to_string();
        }
        out
    }
}

/// Fixed-decimal price labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceFormatter {
    pub decimals: usize,
}

impl PriceFormatter {
    pub fn new(decimals: usize) -> Self { Self { decimals } }

    pub fn format(&self, price: f64) -> String {
        format!("{:.*}", self.decimals, price)
    }
}

impl Default for PriceFormatter {
    fn default() -> Self { Self::new(2) }
}
