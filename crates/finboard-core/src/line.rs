// File: crates/finboard-core/src/line.rs
// Summary: Line chart layout: sample points, smooth stroke/area paths and hover index mapping.

use crate::path::PathData;
use crate::scale::{IndexScale, ValueScale};
use crate::types::{clean_value, SeriesPoint, Viewport};

/// Pixel layout of one sample-indexed series.
#[derive(Clone, Debug)]
pub struct LineLayout {
    pub viewport: Viewport,
    pub points: Vec<SeriesPoint>,
    pub x_scale: IndexScale,
    pub y_scale: ValueScale,
}

impl LineLayout {
    pub fn new(values: &[f64], viewport: Viewport) -> Self {
        let x_scale = IndexScale::new(&viewport, values.len());
        let y_scale = ValueScale::fit(&viewport, values);
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| SeriesPoint::new(x_scale.to_px(i), y_scale.to_px(clean_value(v))))
            .collect();
        Self { viewport, points, x_scale, y_scale }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smooth stroke through every point.
    pub fn stroke_path(&self) -> PathData {
        smooth_path(&self.points)
    }

    /// The stroke closed down to the baseline, for a gradient fill under the line.
    pub fn area_path(&self) -> PathData {
        let mut path = smooth_path(&self.points);
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            let base = self.viewport.baseline();
            path.line_to(last.x, base).line_to(first.x, base).close();
        }
        path
    }

    /// Nearest sample for an x coordinate in this chart's pixel space.
    /// The inverse of the point layout: `hover_index(points[i].x) == Some(i)`.
    pub fn hover_index(&self, x: f64) -> Option<usize> {
        self.x_scale.index_at(x, self.viewport.padding, self.viewport.inner_width())
    }

    /// Nearest sample for a pointer given relative to the element's bounding box
    /// (`offset_x` in `0..=box_width`), as reported by pointer events.
    pub fn hover_index_in_box(&self, offset_x: f64, box_width: f64) -> Option<usize> {
        self.x_scale.index_at(offset_x, 0.0, box_width)
    }
}

/// Cubic segments with both control points on the segment's horizontal midpoint, holding the
/// previous and next heights. Keeps x monotonic and never overshoots the sample values.
pub fn smooth_path(points: &[SeriesPoint]) -> PathData {
    let mut path = PathData::new();
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return path;
    };
    path.move_to(first.x, first.y);
    let mut prev = *first;
    for p in iter {
        let mx = (prev.x + p.x) / 2.0;
        path.cubic_to(mx, prev.y, mx, p.y, p.x, p.y);
        prev = *p;
    }
    path
}
