// File: crates/finboard-core/src/bar.rs
// Summary: Bar chart layout: bars grown from the baseline, centred on the shared index scale.

use crate::geometry::Rect;
use crate::scale::IndexScale;
use crate::types::{clean_value, Viewport};

/// Share of each band a bar fills when no option is given.
pub const DEFAULT_BAR_RATIO: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub value: f64,
    pub rect: Rect,
}

#[derive(Clone, Debug)]
pub struct BarLayout {
    pub viewport: Viewport,
    pub bars: Vec<Bar>,
    pub x_scale: IndexScale,
    /// Value that maps to the full plot height (at least 1).
    pub max: f64,
}

impl BarLayout {
    /// Negative and non-finite samples draw as empty bars.
    pub fn new(values: &[f64], viewport: Viewport, bar_ratio: f64) -> Self {
        let n = values.len();
        let x_scale = IndexScale::new(&viewport, n);
        let max = values.iter().map(|&v| clean_value(v)).fold(1.0_f64, f64::max);
        let band = viewport.inner_width() / n.max(1) as f64;
        let width = (band * bar_ratio.clamp(0.0, 1.0)).max(0.0);
        let base = viewport.baseline();
        let plot_h = viewport.inner_height().max(0.0);

        let bars = values
            .iter()
            .enumerate()
            .map(|(index, &v)| {
                let value = clean_value(v).max(0.0);
                let h = value / max * plot_h;
                let cx = x_scale.to_px(index);
                Bar { index, value, rect: Rect::from_ltrb(cx - width / 2.0, base - h, cx + width / 2.0, base) }
            })
            .collect();
        Self { viewport, bars, x_scale, max }
    }

    /// Same rounding inverse as the line chart, over the bar centres.
    pub fn hover_index(&self, x: f64) -> Option<usize> {
        self.x_scale.index_at(x, self.viewport.padding, self.viewport.inner_width())
    }

    pub fn hover_index_in_box(&self, offset_x: f64, box_width: f64) -> Option<usize> {
        self.x_scale.index_at(offset_x, 0.0, box_width)
    }
}
