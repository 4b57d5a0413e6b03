// File: crates/finboard-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms for sample-indexed dashboard charts.

use crate::types::{clean_value, Viewport};

/// Maps sample indices `0..n` onto evenly spaced x positions inside the padded viewport.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub inner_width: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(viewport: &Viewport, count: usize) -> Self {
        Self { left_px: viewport.padding, inner_width: viewport.inner_width(), count }
    }

    /// Pixel distance between neighbouring samples.
    #[inline]
    pub fn step(&self) -> f64 {
        self.inner_width / self.count.saturating_sub(1).max(1) as f64
    }

    #[inline]
    pub fn to_px(&self, i: usize) -> f64 {
        self.left_px + i as f64 * self.step()
    }

    /// Nearest sample index for a pointer at `px`, where the element's bounding box starts at
    /// `box_left` and is `box_width` wide. Clamped to `[0, n-1]`; `None` when there are no samples.
    pub fn index_at(&self, px: f64, box_left: f64, box_width: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = self.count - 1;
        if box_width <= 0.0 || !px.is_finite() {
            return Some(0);
        }
        let rel = ((px - box_left) / box_width).clamp(0.0, 1.0);
        Some(((rel * last as f64).round() as usize).min(last))
    }
}

/// Vertical value scale: `vmin` sits on the baseline, larger values move up the screen.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub inner_height: f64,
    pub vmin: f64,
    pub span: f64,
}

impl ValueScale {
    /// Span is floored at 1 so a constant series stays finite.
    pub fn new(viewport: &Viewport, vmin: f64, vmax: f64) -> Self {
        let span = (vmax - vmin).max(1.0);
        Self { top_px: viewport.padding, inner_height: viewport.inner_height(), vmin, span }
    }

    /// Fit the scale to a sample set; an empty set behaves like `[0]`.
    pub fn fit(viewport: &Viewport, values: &[f64]) -> Self {
        let (lo, hi) = min_max(values);
        Self::new(viewport, lo, hi)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.top_px + (1.0 - (clean_value(v) - self.vmin) / self.span) * self.inner_height
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        self.vmin + (1.0 - (py - self.top_px) / self.inner_height.max(1e-12)) * self.span
    }
}

/// `(min, max)` over finite-cleaned samples, `(0, 0)` for an empty slice.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let mut it = values.iter().copied().map(clean_value);
    let first = match it.next() {
        Some(v) => v,
        None => return (0.0, 0.0),
    };
    it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Evenly spaced values from `start` to `end` inclusive (grid lines, axis ticks).
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}
