// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use std::ops::Range;

/// `steps + 1` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return vec![start]; }
    let step = (end - start) / steps as f64;
    (0..=steps).map(|i| start + step * i as f64).collect()
}

/// Multiples of `stride` that fall inside `range`.
pub fn stride_indices(range: Range<usize>, stride: usize) -> impl Iterator<Item = usize> {
    let stride = stride.max(1);
    let first = range.start.div_ceil(stride) * stride;
    (first..range.end).step_by(stride)
}
