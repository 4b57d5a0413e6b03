// File: crates/finboard-core/src/interaction.rs
// Summary: Component-local hover/focus state for the chart widgets and KPI cards.
// Notes:
// - Each view owns its `Selection`; every event replaces it wholesale, nothing is shared.
// - Pointer coordinates are in the widget's own pixel space (origin at its top-left).

use crate::bar::BarLayout;
use crate::config::{BarConfig, DonutConfig, LineConfig};
use crate::data::date_label;
use crate::donut::{layout_donut, slice_at_point, DonutSlice};
use crate::format::{format_date, format_money};
use crate::line::LineLayout;
use crate::page::KpiCard;
use crate::types::{ChartDatum, SeriesPoint, Viewport};

/// Which item of a widget is currently highlighted, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub active: Option<usize>,
}

impl Selection {
    pub const NONE: Selection = Selection { active: None };

    pub const fn of(index: usize) -> Self {
        Self { active: Some(index) }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// Input delivered to a widget, in widget-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Leave,
    /// Keyboard focus landed on item `index`.
    Focus(usize),
    Blur,
}

/// A widget that reacts to pointer and focus events by swapping its selection.
pub trait Interactive {
    fn handle_event(&mut self, evt: &PointerEvent);
    fn selection(&self) -> Selection;
}

/// Two label/value rows shown over the hovered item of a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub rows: [(&'static str, String); 2],
}

/// Apply a keyboard focus to `view` when `index` is set; leaves it untouched otherwise.
pub fn focus_item<V: Interactive>(view: &mut V, index: Option<usize>) {
    if let Some(i) = index {
        view.handle_event(&PointerEvent::Focus(i));
    }
}

pub struct DonutChartView {
    pub slices: Vec<DonutSlice>,
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub lift: f64,
    selection: Selection,
}

impl DonutChartView {
    pub fn new(data: &[ChartDatum], cfg: &DonutConfig, cx: f64, cy: f64) -> Self {
        Self {
            slices: layout_donut(data, &cfg.options()),
            cx,
            cy,
            outer_radius: cfg.outer_radius,
            inner_radius: cfg.inner_radius,
            lift: cfg.lift,
            selection: Selection::NONE,
        }
    }

    pub fn active_slice(&self) -> Option<&DonutSlice> {
        self.selection.active.and_then(|i| self.slices.get(i))
    }

    /// Translation for the slice at position `pos`: lifted when hovered, else none.
    pub fn offset_for(&self, pos: usize) -> (f64, f64) {
        match self.slices.get(pos) {
            Some(slice) if self.selection.is_active(pos) => slice.lift(self.lift),
            _ => (0.0, 0.0),
        }
    }

    /// Category and its share of `total_revenue` for the hovered slice.
    pub fn tooltip(&self, total_revenue: f64) -> Option<Tooltip> {
        let slice = self.active_slice()?;
        Some(Tooltip {
            rows: [("Category", slice.label.clone()), ("Revenue", format_money(total_revenue * slice.value))],
        })
    }
}

impl Interactive for DonutChartView {
    fn handle_event(&mut self, evt: &PointerEvent) {
        self.selection = match *evt {
            PointerEvent::Enter { x, y } | PointerEvent::Move { x, y } => Selection {
                active: slice_at_point(&self.slices, self.cx, self.cy, self.outer_radius, self.inner_radius, x, y),
            },
            PointerEvent::Focus(i) if i < self.slices.len() => Selection::of(i),
            PointerEvent::Focus(_) | PointerEvent::Leave | PointerEvent::Blur => Selection::NONE,
        };
    }

    fn selection(&self) -> Selection {
        self.selection
    }
}

pub struct LineChartView {
    pub layout: LineLayout,
    selection: Selection,
}

impl LineChartView {
    pub fn new(values: &[f64], width: f64, height: f64, cfg: &LineConfig) -> Self {
        Self { layout: LineLayout::new(values, Viewport::new(width, height, cfg.padding)), selection: Selection::NONE }
    }

    pub fn active_point(&self) -> Option<SeriesPoint> {
        self.selection.active.and_then(|i| self.layout.points.get(i).copied())
    }
}

impl Interactive for LineChartView {
    fn handle_event(&mut self, evt: &PointerEvent) {
        self.selection = match *evt {
            PointerEvent::Enter { x, .. } | PointerEvent::Move { x, .. } => {
                Selection { active: self.layout.hover_index(x) }
            }
            PointerEvent::Focus(i) if i < self.layout.len() => Selection::of(i),
            PointerEvent::Focus(_) | PointerEvent::Leave | PointerEvent::Blur => Selection::NONE,
        };
    }

    fn selection(&self) -> Selection {
        self.selection
    }
}

pub struct BarChartView {
    pub layout: BarLayout,
    selection: Selection,
}

impl BarChartView {
    pub fn new(values: &[f64], width: f64, height: f64, cfg: &BarConfig) -> Self {
        Self {
            layout: BarLayout::new(values, Viewport::new(width, height, cfg.padding), cfg.bar_ratio),
            selection: Selection::NONE,
        }
    }

    /// Date of the hovered day and its amount.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let i = self.selection.active?;
        let bar = self.layout.bars.get(i)?;
        Some(Tooltip { rows: [("Date", format_date(date_label(i))), ("Revenue", format_money(bar.value))] })
    }
}

impl Interactive for BarChartView {
    fn handle_event(&mut self, evt: &PointerEvent) {
        self.selection = match *evt {
            PointerEvent::Enter { x, .. } | PointerEvent::Move { x, .. } => {
                Selection { active: self.layout.hover_index(x) }
            }
            PointerEvent::Focus(i) if i < self.layout.bars.len() => Selection::of(i),
            PointerEvent::Focus(_) | PointerEvent::Leave | PointerEvent::Blur => Selection::NONE,
        };
    }

    fn selection(&self) -> Selection {
        self.selection
    }
}

/// Row of KPI cards; focus highlights one card, pointer events are ignored.
pub struct KpiStrip {
    pub cards: Vec<KpiCard>,
    focused: Selection,
}

impl KpiStrip {
    pub fn new(cards: Vec<KpiCard>) -> Self {
        Self { cards, focused: Selection::NONE }
    }

    pub fn focused_card(&self) -> Option<&KpiCard> {
        self.focused.active.and_then(|i| self.cards.get(i))
    }
}

impl Interactive for KpiStrip {
    fn handle_event(&mut self, evt: &PointerEvent) {
        self.focused = match *evt {
            PointerEvent::Focus(i) if i < self.cards.len() => Selection::of(i),
            PointerEvent::Blur | PointerEvent::Focus(_) => Selection::NONE,
            PointerEvent::Enter { .. } | PointerEvent::Move { .. } | PointerEvent::Leave => self.focused,
        };
    }

    fn selection(&self) -> Selection {
        self.focused
    }
}
