// File: crates/chart-core/tests/viewport.rs
// Purpose: Viewport mapping, pan/zoom clamping and visible-range computation.

use approx::assert_relative_eq;
use chart_core::Viewport;

fn viewport(bars: usize, canvas: f32) -> Viewport {
    let mut v = Viewport::new(5.0, 2.0, 20.0);
    v.set_extent(bars, canvas);
    v
}

#[test]
fn bar_pixel_x_applies_width_and_offset() {
    let mut v = viewport(100, 100.0);
    assert_relative_eq!(v.bar_pixel_x(3), 15.0);
    v.pan(-40.0);
    assert_relative_eq!(v.bar_pixel_x(3), -25.0);
    assert_relative_eq!(v.bar_center_x(10), 12.5);
}

#[test]
fn price_to_y_maps_range_onto_inverted_axis() {
    assert_relative_eq!(Viewport::price_to_y(9.0, 9.0, 13.0, 100.0), 100.0);
    assert_relative_eq!(Viewport::price_to_y(13.0, 9.0, 13.0, 100.0), 0.0);
    assert_relative_eq!(Viewport::price_to_y(11.0, 9.0, 13.0, 100.0), 50.0);
}

#[test]
fn price_to_y_flat_range_is_mid_height() {
    assert_relative_eq!(Viewport::price_to_y(10.0, 10.0, 10.0, 100.0), 50.0);
    assert_relative_eq!(Viewport::price_to_y(42.0, 10.0, 10.0, 80.0), 40.0);
}

#[test]
fn pan_clamps_at_both_edges() {
    let mut v = viewport(100, 100.0);
    assert_relative_eq!(v.max_offset(), -400.0);

    v.pan(50.0);
    assert_relative_eq!(v.offset_x(), 0.0);

    v.pan(-100_000.0);
    assert_relative_eq!(v.offset_x(), -400.0);

    v.pan(20.0);
    assert_relative_eq!(v.offset_x(), -380.0);
}

#[test]
fn pan_on_content_narrower_than_canvas_stays_at_zero() {
    let mut v = viewport(3, 100.0);
    assert_relative_eq!(v.max_offset(), 0.0);
    v.pan(-100_000.0);
    assert_relative_eq!(v.offset_x(), 0.0);
}

#[test]
fn zoom_clamps_width_regardless_of_delta() {
    let mut v = viewport(100, 100.0);
    v.zoom(1);
    assert_relative_eq!(v.bar_width(), 6.0);
    v.zoom(1_000);
    assert_relative_eq!(v.bar_width(), 20.0);
    v.zoom(-1_000);
    assert_relative_eq!(v.bar_width(), 2.0);
}

#[test]
fn zoom_out_reclamps_previous_offset() {
    let mut v = viewport(100, 100.0);
    v.pan(-100_000.0);
    assert_relative_eq!(v.offset_x(), -400.0);

    v.zoom(-1);
    assert_relative_eq!(v.bar_width(), 4.0);
    assert_relative_eq!(v.max_offset(), -300.0);
    assert_relative_eq!(v.offset_x(), -300.0);
}

#[test]
fn shrinking_extent_reclamps_offset() {
    let mut v = viewport(100, 100.0);
    v.pan(-400.0);
    v.set_extent(40, 100.0);
    assert_relative_eq!(v.offset_x(), -100.0);
    v.set_extent(40, 400.0);
    assert_relative_eq!(v.offset_x(), 0.0);
}

#[test]
fn constructor_clamps_initial_width() {
    let v = Viewport::new(50.0, 2.0, 20.0);
    assert_relative_eq!(v.bar_width(), 20.0);
    let v = Viewport::new(1.0, 2.0, 20.0);
    assert_relative_eq!(v.bar_width(), 2.0);
}

#[test]
fn visible_range_follows_offset() {
    let mut v = viewport(100, 100.0);
    assert_eq!(v.visible_range(), 0..20);

    v.pan(-30.0);
    assert_eq!(v.visible_range(), 6..26);

    v.pan(-100_000.0);
    assert_eq!(v.visible_range(), 80..100);
}

#[test]
fn visible_range_empty_without_bars_or_canvas() {
    assert_eq!(viewport(0, 100.0).visible_range(), 0..0);
    assert_eq!(viewport(10, 0.0).visible_range(), 0..0);
}

#[test]
fn index_at_x_inverts_bar_pixel_x() {
    let mut v = viewport(100, 100.0);
    v.pan(-400.0);
    assert_eq!(v.index_at_x(0.0), Some(80));
    assert_eq!(v.index_at_x(4.9), Some(80));
    assert_eq!(v.index_at_x(5.0), Some(81));
    assert_eq!(v.index_at_x(99.9), Some(99));
    assert_eq!(v.index_at_x(100.0), None);
}
