// File: crates/finboard-core/tests/line_bar_layout.rs
// Purpose: Line and bar layouts: point placement, degenerate series, hover index mapping.

use finboard_core::bar::DEFAULT_BAR_RATIO;
use finboard_core::scale::{linspace, min_max};
use finboard_core::{smooth_path, BarLayout, LineLayout, SeriesPoint, Viewport};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn points_span_the_padded_viewport() {
    let layout = LineLayout::new(&[10.0, 20.0, 30.0], Viewport::new(200.0, 100.0, 10.0));
    let xs: Vec<f64> = layout.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = layout.points.iter().map(|p| p.y).collect();
    assert_eq!(xs, vec![10.0, 100.0, 190.0]);
    assert!(approx(ys[0], 90.0), "min sits on the baseline");
    assert!(approx(ys[1], 50.0));
    assert!(approx(ys[2], 10.0), "max touches the top padding");
}

#[test]
fn constant_series_stays_finite_and_flat() {
    let layout = LineLayout::new(&[10.0, 10.0, 10.0], Viewport::new(300.0, 120.0, 24.0));
    assert!(layout.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(layout.points.iter().all(|p| approx(p.y, 96.0)));
}

#[test]
fn single_sample_sits_at_left_padding() {
    let layout = LineLayout::new(&[42.0], Viewport::new(300.0, 120.0, 24.0));
    assert_eq!(layout.points.len(), 1);
    assert!(approx(layout.points[0].x, 24.0));
    assert_eq!(layout.hover_index(0.0), Some(0));
    assert_eq!(layout.hover_index(300.0), Some(0));
}

#[test]
fn empty_series_has_no_path_and_no_hover() {
    let layout = LineLayout::new(&[], Viewport::default());
    assert!(layout.is_empty());
    assert!(layout.stroke_path().is_empty());
    assert!(layout.area_path().is_empty());
    assert_eq!(layout.hover_index(100.0), None);
}

#[test]
fn hover_index_inverts_point_positions() {
    let values: Vec<f64> = (0..12).map(|i| (i as f64 * 0.7).sin() * 1000.0).collect();
    let layout = LineLayout::new(&values, Viewport::new(733.0, 240.0, 24.0));
    for (i, p) in layout.points.iter().enumerate() {
        assert_eq!(layout.hover_index(p.x), Some(i), "x = {}", p.x);
    }
}

#[test]
fn hover_index_clamps_outside_the_plot() {
    let layout = LineLayout::new(&[1.0, 2.0, 3.0], Viewport::new(200.0, 100.0, 10.0));
    assert_eq!(layout.hover_index(-50.0), Some(0));
    assert_eq!(layout.hover_index(1000.0), Some(2));
    assert_eq!(layout.hover_index(f64::NAN), Some(0));
    // pointer offset against the element box
    assert_eq!(layout.hover_index_in_box(100.0, 200.0), Some(1));
    assert_eq!(layout.hover_index_in_box(200.0, 200.0), Some(2));
}

#[test]
fn smooth_path_uses_midpoint_controls() {
    let path = smooth_path(&[SeriesPoint::new(0.0, 0.0), SeriesPoint::new(10.0, 10.0)]);
    assert_eq!(path.to_svg_d(), "M 0 0 C 5 0 5 10 10 10");
}

#[test]
fn area_path_closes_to_baseline() {
    let layout = LineLayout::new(&[1.0, 3.0], Viewport::new(100.0, 50.0, 10.0));
    let d = layout.area_path().to_svg_d();
    assert!(d.starts_with("M 10 40"), "{d}");
    assert!(d.ends_with("L 90 40 L 10 40 Z"), "{d}");
}

#[test]
fn bars_grow_from_baseline_centred_on_samples() {
    let layout = BarLayout::new(&[0.0, 50.0, 100.0], Viewport::new(300.0, 120.0, 10.0), 0.5);
    assert!(approx(layout.max, 100.0));
    let [b0, b1, b2] = [layout.bars[0], layout.bars[1], layout.bars[2]];
    assert!(approx(b0.rect.height(), 0.0));
    assert!(approx(b1.rect.top, 60.0));
    assert!(approx(b2.rect.top, 10.0));
    assert!(layout.bars.iter().all(|b| approx(b.rect.bottom, 110.0)));
    assert!(approx((b1.rect.left + b1.rect.right) / 2.0, 150.0));
    assert!(approx(b1.rect.width(), 280.0 / 3.0 * 0.5));
    assert_eq!(layout.hover_index(150.0), Some(1));
}

#[test]
fn bar_max_is_floored_at_one() {
    let layout = BarLayout::new(&[0.0, 0.0, -4.0], Viewport::new(300.0, 120.0, 10.0), DEFAULT_BAR_RATIO);
    assert!(approx(layout.max, 1.0));
    assert!(layout.bars.iter().all(|b| approx(b.rect.height(), 0.0) && b.value == 0.0));

    let small = BarLayout::new(&[0.25, 0.5], Viewport::new(300.0, 120.0, 10.0), DEFAULT_BAR_RATIO);
    assert!(approx(small.bars[1].rect.height(), 50.0));
}

#[test]
fn scale_helpers() {
    assert_eq!(min_max(&[]), (0.0, 0.0));
    assert_eq!(min_max(&[3.0, f64::NAN, -2.0]), (-2.0, 3.0));
    assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
    assert_eq!(linspace(0.0, 10.0, 1), vec![0.0, 10.0]);
}
