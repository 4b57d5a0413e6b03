// File: crates/finboard-core/tests/donut_layout.rs
// Purpose: Donut slice layout, ring path shapes and angle/point hit testing.

use finboard_core::donut::{raw_spans, slice_at_angle, slice_at_point};
use finboard_core::geometry::{polar_to_cartesian, slice_geometry};
use finboard_core::path::PathCmd;
use finboard_core::{describe_donut_slice, layout_donut, ChartDatum, DonutOptions};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn data(values: &[f64]) -> Vec<ChartDatum> {
    values.iter().enumerate().map(|(i, &v)| ChartDatum::new(format!("d{i}"), v)).collect()
}

#[test]
fn three_way_breakdown_from_220_with_gap() {
    let slices = layout_donut(&data(&[0.62, 0.23, 0.15]), &DonutOptions { start_angle: 220.0, gap: 6.0 });
    assert_eq!(slices.len(), 3);

    let a = &slices[0];
    assert!(approx(a.start, 223.0), "start {}", a.start);
    assert!(approx(a.end, 440.2), "end {}", a.end);
    assert!(approx(a.mid, 331.6));
    assert!(approx(a.fraction, 0.62));
    // stored angles stay unnormalized; the range view wraps them
    let r = a.range();
    assert!(approx(r.start, 223.0));
    assert!(approx(r.end, 80.2));
    assert!(approx(r.sweep(), 217.2));
    assert!(a.geometry(0.0, 0.0, 92.0, 62.0).large_arc);

    let b = &slices[1];
    assert!(approx(b.start, 446.2));
    assert!(approx(b.end, 523.0));
    assert!(!b.geometry(0.0, 0.0, 92.0, 62.0).large_arc);

    let c = &slices[2];
    assert!(approx(c.start, 529.0));
    assert!(approx(c.end, 577.0));
    assert!(approx(slices.iter().map(|s| s.fraction).sum::<f64>(), 1.0));
}

#[test]
fn zero_value_slice_is_omitted_and_indices_kept() {
    let slices = layout_donut(&data(&[50.0, 0.0, 50.0]), &DonutOptions::default());
    let indices: Vec<usize> = slices.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(slices[1].label, "d2");
}

#[test]
fn all_zero_total_yields_no_slices() {
    let spans = raw_spans(&data(&[0.0, 0.0, 0.0]));
    assert!(spans.iter().all(|s| *s == 0.0));
    assert!(layout_donut(&data(&[0.0, 0.0, 0.0]), &DonutOptions::default()).is_empty());
    assert!(layout_donut(&data(&[0.0, 0.0]), &DonutOptions { start_angle: 0.0, gap: 0.0 }).is_empty());
    assert!(layout_donut(&[], &DonutOptions::default()).is_empty());
}

#[test]
fn negative_and_nan_values_count_as_zero() {
    let spans = raw_spans(&data(&[-5.0, f64::NAN, 10.0]));
    assert_eq!(spans[0], 0.0);
    assert_eq!(spans[1], 0.0);
    assert!(approx(spans[2], 360.0));
}

#[test]
fn quarter_slice_path_matches_svg() {
    let geom = slice_geometry(0.0, 0.0, 10.0, 5.0, 0.0, 90.0);
    assert!(approx(geom.sweep, 90.0));
    assert!(!geom.large_arc);
    assert_eq!(geom.path.to_svg_d(), "M 0 -10 A 10 10 0 0 1 10 0 L 5 0 A 5 5 0 0 0 0 -5 Z");
}

#[test]
fn equal_angles_draw_a_full_ring() {
    let path = describe_donut_slice(100.0, 100.0, 50.0, 30.0, 90.0, 90.0);
    assert!(!path.is_empty());
    let arcs = path.commands().iter().filter(|c| matches!(c, PathCmd::ArcTo { .. })).count();
    assert_eq!(arcs, 4, "full ring is drawn as two half arcs per radius");

    let geom = slice_geometry(100.0, 100.0, 50.0, 30.0, 10.0, 370.0);
    assert!(approx(geom.sweep, 360.0));
    assert!(geom.large_arc);
}

#[test]
fn single_datum_without_gap_is_a_full_ring() {
    let slices = layout_donut(&data(&[42.0]), &DonutOptions { start_angle: 220.0, gap: 0.0 });
    assert_eq!(slices.len(), 1);
    let geom = slices[0].geometry(0.0, 0.0, 92.0, 62.0);
    assert!(approx(geom.sweep, 360.0));
    assert_eq!(geom.path.commands().len(), 7);
}

#[test]
fn polar_zero_is_twelve_oclock_and_clockwise() {
    let (x, y) = polar_to_cartesian(50.0, 50.0, 10.0, 0.0);
    assert!(approx(x, 50.0) && approx(y, 40.0));
    let (x, y) = polar_to_cartesian(50.0, 50.0, 10.0, 90.0);
    assert!(approx(x, 60.0) && approx(y, 50.0));
    let (x, y) = polar_to_cartesian(50.0, 50.0, 10.0, 180.0);
    assert!(approx(x, 50.0) && approx(y, 60.0));
}

#[test]
fn angle_hit_test_skips_gaps() {
    let slices = layout_donut(&data(&[1.0, 1.0]), &DonutOptions { start_angle: 0.0, gap: 6.0 });
    assert_eq!(slice_at_angle(&slices, 90.0), Some(0));
    assert_eq!(slice_at_angle(&slices, 270.0), Some(1));
    assert_eq!(slice_at_angle(&slices, -90.0), Some(1));
    assert_eq!(slice_at_angle(&slices, 0.0), None);
    assert_eq!(slice_at_angle(&slices, 180.0), None);
}

#[test]
fn point_hit_test_respects_ring_radii() {
    let slices = layout_donut(&data(&[1.0, 1.0]), &DonutOptions { start_angle: 0.0, gap: 6.0 });
    assert_eq!(slice_at_point(&slices, 100.0, 100.0, 50.0, 30.0, 140.0, 100.0), Some(0));
    assert_eq!(slice_at_point(&slices, 100.0, 100.0, 50.0, 30.0, 60.0, 100.0), Some(1));
    assert_eq!(slice_at_point(&slices, 100.0, 100.0, 50.0, 30.0, 100.0, 100.0), None);
    assert_eq!(slice_at_point(&slices, 100.0, 100.0, 50.0, 30.0, 170.0, 100.0), None);
}

#[test]
fn lift_moves_outward_along_mid_angle() {
    let slices = layout_donut(&data(&[1.0, 1.0]), &DonutOptions { start_angle: 0.0, gap: 0.0 });
    let (dx, dy) = slices[0].lift(6.0);
    assert!(approx(dx, 6.0) && approx(dy, 0.0));
    let (ax, ay) = slices[1].anchor(0.0, 0.0, 10.0);
    assert!(approx(ax, -10.0) && approx(ay, 0.0));
}
