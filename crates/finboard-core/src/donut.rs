// File: crates/finboard-core/src/donut.rs
// Summary: Donut slice layout (proportional spans, gap shrinkage, mid angles) and per-slice ring paths.

use tracing::debug;

use crate::geometry::{lift_offset, polar_to_cartesian, slice_geometry, SliceGeometry};
use crate::types::{normalize_degrees, AngleRange, ChartDatum};

/// Where slices start and how far apart they sit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutOptions {
    /// Degrees clockwise from 12 o'clock where the first slice begins.
    pub start_angle: f64,
    /// Degrees removed between neighbouring slices (half from each side).
    pub gap: f64,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self { start_angle: 220.0, gap: 6.0 }
    }
}

/// One rendered slice. `start`/`end`/`mid` are unnormalized degrees and may exceed 360.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    /// Position of the datum in the input sequence.
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Share of the total in [0, 1].
    pub fraction: f64,
    pub start: f64,
    pub end: f64,
    pub mid: f64,
}

impl DonutSlice {
    /// Normalized [0, 360) view of this slice's angles.
    pub fn range(&self) -> AngleRange {
        AngleRange::new(self.start, self.end)
    }

    /// Ring path for this slice around `(cx, cy)`.
    pub fn geometry(&self, cx: f64, cy: f64, outer_r: f64, inner_r: f64) -> SliceGeometry {
        slice_geometry(cx, cy, outer_r, inner_r, self.start, self.end)
    }

    /// Label/tooltip anchor on the circle of radius `r`.
    pub fn anchor(&self, cx: f64, cy: f64, r: f64) -> (f64, f64) {
        polar_to_cartesian(cx, cy, r, self.mid)
    }

    /// Translation applied when this slice is lifted out of the ring.
    pub fn lift(&self, lift: f64) -> (f64, f64) {
        lift_offset(self.mid, lift)
    }
}

/// Raw (pre-gap) spans in degrees, one per datum, in input order.
pub fn raw_spans(data: &[ChartDatum]) -> Vec<f64> {
    let sum: f64 = data.iter().map(ChartDatum::magnitude).sum();
    let total = if sum > 0.0 { sum } else { 1.0 };
    data.iter().map(|d| d.magnitude() / total * 360.0).collect()
}

/// Lay out slices clockwise in input order. Slices whose span vanishes after the gap is
/// taken out are omitted; surviving slices keep their input `index`.
pub fn layout_donut(data: &[ChartDatum], opts: &DonutOptions) -> Vec<DonutSlice> {
    let spans = raw_spans(data);
    let sum: f64 = data.iter().map(ChartDatum::magnitude).sum();
    let total = if sum > 0.0 { sum } else { 1.0 };
    let half_gap = opts.gap / 2.0;

    let mut slices = Vec::with_capacity(data.len());
    let mut cursor = opts.start_angle;
    for (index, (datum, span)) in data.iter().zip(spans).enumerate() {
        let raw_start = cursor;
        let raw_end = cursor + span;
        cursor = raw_end;

        let a0 = raw_start + half_gap;
        let a1 = raw_end - half_gap;
        if a1 <= a0 {
            debug!(label = %datum.label, span, gap = opts.gap, "donut slice dropped after gap shrink");
            continue;
        }
        slices.push(DonutSlice {
            index,
            label: datum.label.clone(),
            value: datum.magnitude(),
            fraction: datum.magnitude() / total,
            start: a0,
            end: a1,
            mid: (a0 + a1) / 2.0,
        });
    }
    slices
}

/// Find the rendered slice that covers `angle_deg` (clockwise from 12 o'clock), if any.
/// Angles falling inside a gap return `None`.
pub fn slice_at_angle(slices: &[DonutSlice], angle_deg: f64) -> Option<usize> {
    let a = normalize_degrees(angle_deg);
    slices.iter().position(|s| {
        let range = s.range();
        (a - range.start).rem_euclid(360.0) <= range.sweep()
    })
}

/// Hit-test a pointer at `(px, py)` against the ring between `inner_r` and `outer_r`.
pub fn slice_at_point(
    slices: &[DonutSlice],
    cx: f64,
    cy: f64,
    outer_r: f64,
    inner_r: f64,
    px: f64,
    py: f64,
) -> Option<usize> {
    let (dx, dy) = (px - cx, py - cy);
    let dist = dx.hypot(dy);
    if dist < inner_r || dist > outer_r {
        return None;
    }
    slice_at_angle(slices, dy.atan2(dx).to_degrees() + 90.0)
}
