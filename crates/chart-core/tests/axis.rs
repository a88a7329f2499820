// File: crates/chart-core/tests/axis.rs
// Purpose: Price/date tick layout and label formatting.

use approx::assert_relative_eq;
use chart_core::{AxisRenderer, Bar, ChronoDateFormatter, DateFormatter, PriceFormatter, PriceRange, Viewport};

#[test]
fn price_ticks_are_evenly_spaced_inclusive() {
    let axes = AxisRenderer::new(10, 50, 12.0);
    let ticks = axes.price_ticks(PriceRange { min: 9.0, max: 13.0 }, 100.0, &PriceFormatter::new(2));
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[0].label, "9.00");
    assert_eq!(ticks[10].label, "13.00");
    for (i, t) in ticks.iter().enumerate() {
        assert_relative_eq!(t.position, 100.0 - 10.0 * i as f32, epsilon = 1e-3);
    }
}

#[test]
fn price_ticks_respect_step_count() {
    let axes = AxisRenderer::new(4, 50, 12.0);
    let ticks = axes.price_ticks(PriceRange { min: 0.0, max: 1.0 }, 200.0, &PriceFormatter::new(3));
    let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["0.000", "0.250", "0.500", "0.750", "1.000"]);
}

fn daily_bars(n: usize) -> Vec<Bar> {
    (0..n).map(|i| Bar::try_new(1.0, 2.0, 0.5, 1.5, i as i64 * 86_400).expect("bar")).collect()
}

#[test]
fn date_ticks_sample_every_nth_bar_center() {
    let bars = daily_bars(100);
    let mut v = Viewport::new(5.0, 2.0, 20.0);
    v.set_extent(bars.len(), 200.0);
    let axes = AxisRenderer::new(10, 10, 12.0);
    let ticks = axes.date_ticks(&bars, &v, 200.0, &ChronoDateFormatter::default());

    let xs: Vec<f32> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(xs, [2.5, 52.5, 102.5, 152.5]);
    assert_eq!(ticks[1].label, "11/01/70");
}

#[test]
fn date_ticks_skip_centers_outside_canvas() {
    let bars = daily_bars(100);
    let mut v = Viewport::new(5.0, 2.0, 20.0);
    v.set_extent(bars.len(), 200.0);
    v.pan(-55.0);
    let axes = AxisRenderer::new(10, 10, 12.0);
    let ticks = axes.date_ticks(&bars, &v, 200.0, &ChronoDateFormatter::default());

    // bar 10 center at -2.5 is culled; bar 50 center at 197.5 is kept
    let xs: Vec<f32> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(xs, [47.5, 97.5, 147.5, 197.5]);
    assert!(ticks.iter().all(|t| t.position >= 0.0 && t.position < 200.0));
}

#[test]
fn date_ticks_empty_for_empty_series() {
    let v = Viewport::new(5.0, 2.0, 20.0);
    let ticks = AxisRenderer::default().date_ticks(&[], &v, 200.0, &ChronoDateFormatter::default());
    assert!(ticks.is_empty());
}

#[test]
fn chrono_formatter_uses_pattern_in_utc() {
    assert_eq!(ChronoDateFormatter::default().format(86_400), "02/01/70");
    assert_eq!(ChronoDateFormatter::new("%Y-%m-%d %H:%M").format(1_700_000_000), "2023-11-14 22:13");
}
