// File: crates/finboard-core/src/geometry.rs
// Summary: Pixel geometry helpers: rectangles, polar conversion (12 o'clock, clockwise) and donut arc paths.

use crate::path::PathData;
use crate::types::clockwise_delta;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Point at `radius` from `(cx, cy)`, with `angle_deg` measured clockwise from 12 o'clock.
#[inline]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Ring segment between two radii, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceGeometry {
    /// Clockwise sweep in degrees, in (0, 360].
    pub sweep: f64,
    /// SVG large-arc flag for the sweep (`sweep > 180`).
    pub large_arc: bool,
    pub path: PathData,
}

/// Closed ring-segment path: outer arc clockwise, radial line in, inner arc back, close.
///
/// Angles are degrees clockwise from 12 o'clock and may be unnormalized. A sweep that
/// normalizes to zero is treated as a full ring; that case is drawn as two half arcs per
/// radius because a single SVG arc with coincident endpoints renders nothing.
pub fn slice_geometry(
    cx: f64,
    cy: f64,
    outer_r: f64,
    inner_r: f64,
    start_deg: f64,
    end_deg: f64,
) -> SliceGeometry {
    let sweep = clockwise_delta(start_deg, end_deg);
    let large_arc = sweep > 180.0;

    let (osx, osy) = polar_to_cartesian(cx, cy, outer_r, start_deg);
    let (oex, oey) = polar_to_cartesian(cx, cy, outer_r, end_deg);
    let (iex, iey) = polar_to_cartesian(cx, cy, inner_r, end_deg);
    let (isx, isy) = polar_to_cartesian(cx, cy, inner_r, start_deg);

    let mut path = PathData::new();
    path.move_to(osx, osy);
    if sweep >= 360.0 {
        let (omx, omy) = polar_to_cartesian(cx, cy, outer_r, start_deg + 180.0);
        let (imx, imy) = polar_to_cartesian(cx, cy, inner_r, start_deg + 180.0);
        path.arc_to(outer_r, false, true, omx, omy)
            .arc_to(outer_r, false, true, oex, oey)
            .line_to(iex, iey)
            .arc_to(inner_r, false, false, imx, imy)
            .arc_to(inner_r, false, false, isx, isy);
    } else {
        path.arc_to(outer_r, large_arc, true, oex, oey)
            .line_to(iex, iey)
            .arc_to(inner_r, large_arc, false, isx, isy);
    }
    path.close();
    SliceGeometry { sweep, large_arc, path }
}

/// Path-only shorthand for [`slice_geometry`].
pub fn describe_donut_slice(
    cx: f64,
    cy: f64,
    outer_r: f64,
    inner_r: f64,
    start_deg: f64,
    end_deg: f64,
) -> PathData {
    slice_geometry(cx, cy, outer_r, inner_r, start_deg, end_deg).path
}

/// Offset that pushes a slice outward along its mid angle by `lift` pixels.
#[inline]
pub fn lift_offset(mid_deg: f64, lift: f64) -> (f64, f64) {
    polar_to_cartesian(0.0, 0.0, lift, mid_deg)
}
