// File: crates/finboard-core/src/types.rs
// Summary: Shared chart value types and default sizes (viewport, data points, angle ranges).

/// Default dashboard canvas width in pixels.
pub const WIDTH: i32 = 1280;
/// Default dashboard canvas height in pixels.
pub const HEIGHT: i32 = 860;

/// A named non-negative magnitude drawn proportionally (donut slice, bar).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }

    /// Value floored at zero; NaN and infinities count as zero.
    pub fn magnitude(&self) -> f64 {
        clean_value(self.value).max(0.0)
    }
}

/// Plotting area of a chart: outer size plus a uniform padding.
/// Contract: `width`/`height` are the full element size, `padding` is applied on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }
    /// Drawable width between the paddings (may be zero or negative for tiny viewports).
    pub fn inner_width(&self) -> f64 { self.width - 2.0 * self.padding }
    /// Drawable height between the paddings.
    pub fn inner_height(&self) -> f64 { self.height - 2.0 * self.padding }
    /// Screen y of the plot baseline.
    pub fn baseline(&self) -> f64 { self.height - self.padding }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640.0, 240.0, 24.0)
    }
}

/// One plotted sample in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angular interval in degrees, clockwise from 12 o'clock, normalized to [0, 360).
/// `end` is reached from `start` by sweeping clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    pub start: f64,
    pub end: f64,
}

impl AngleRange {
    /// Build from arbitrary (possibly > 360 or negative) degrees.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start: normalize_degrees(start), end: normalize_degrees(end) }
    }

    /// Clockwise distance from `start` to `end`; a zero distance means a full turn.
    pub fn sweep(&self) -> f64 {
        clockwise_delta(self.start, self.end)
    }
}

/// Wrap any angle into [0, 360).
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = clean_value(deg).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Clockwise sweep from `start` to `end`, in (0, 360].
#[inline]
pub fn clockwise_delta(start: f64, end: f64) -> f64 {
    let delta = (normalize_degrees(end) - normalize_degrees(start)).rem_euclid(360.0);
    if delta <= 0.0 { 360.0 } else { delta }
}

/// Missing or non-finite samples read as zero.
#[inline]
pub fn clean_value(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
