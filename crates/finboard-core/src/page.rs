// File: crates/finboard-core/src/page.rs
// Summary: Sidebar destinations, their KPI rows and the card grid each page composes.

use crate::config::{BarConfig, DonutConfig, LineConfig};
use crate::data::{self, Activity, ActivityGroup, Kpis, ProfitNote, Transaction, TxStatus};
use crate::format::format_count;
use crate::geometry::Rect;
use crate::icons::IconName;
use crate::interaction::{BarChartView, DonutChartView, LineChartView};
use crate::types::ChartDatum;

pub const SIDEBAR_WIDTH: f64 = 220.0;
pub const MARGIN: f64 = 24.0;
pub const GUTTER: f64 = 16.0;
pub const HEADER_HEIGHT: f64 = 64.0;
/// Height of the title strip at the top of every titled card.
pub const CARD_TITLE_HEIGHT: f64 = 44.0;
/// Height of one donut legend row under the ring.
pub const LEGEND_ROW_HEIGHT: f64 = 22.0;
pub const KPI_ROW_HEIGHT: f64 = 110.0;
/// Height of one pill in the status filter card.
pub const FILTER_ROW_HEIGHT: f64 = 40.0;
/// Height of one row in the status breakdown card.
pub const STATUS_ROW_HEIGHT: f64 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Revenue,
    History,
    Profits,
    Transactions,
}

impl Page {
    /// In sidebar order.
    pub const ALL: [Page; 5] = [Page::Dashboard, Page::Revenue, Page::History, Page::Profits, Page::Transactions];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Revenue => "Revenue",
            Page::History => "History",
            Page::Profits => "Profits",
            Page::Transactions => "Transactions",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Revenue => "revenue",
            Page::History => "history",
            Page::Profits => "profits",
            Page::Transactions => "transactions",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Page::Dashboard => IconName::Grid,
            Page::Revenue => IconName::Revenue,
            Page::History => IconName::History,
            Page::Profits => IconName::Profits,
            Page::Transactions => IconName::Transactions,
        }
    }

    pub fn from_slug(s: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug().eq_ignore_ascii_case(s))
    }
}

/// A card on a page and what it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Widget {
    /// The page's `kpi_cards(..)[i]`.
    Kpi(usize),
    /// Recent activity grouped by day, with the top spender beside it.
    ActivityFeed,
    NetProfit,
    Breakdown,
    DailyVolume,
    DailyRevenue,
    ProfitNotes,
    StatusFilter,
    StatusBreakdown,
    TransactionTable,
}

impl Widget {
    pub fn title(self) -> &'static str {
        match self {
            Widget::Kpi(_) | Widget::TransactionTable => "",
            Widget::ActivityFeed => "Transactions",
            Widget::NetProfit => "Net Profit",
            Widget::Breakdown => "Revenue Breakdown",
            Widget::DailyVolume => "Daily Transaction Volume",
            Widget::DailyRevenue => "Daily Revenue",
            Widget::ProfitNotes => "Profit Notes",
            Widget::StatusFilter => "Filter",
            Widget::StatusBreakdown => "Status Breakdown",
        }
    }

    /// Room between the title and the body for a headline figure.
    pub fn lead_height(self) -> f64 {
        match self {
            Widget::NetProfit | Widget::DailyRevenue => 52.0,
            _ => 0.0,
        }
    }
}

/// Trailing marker on a KPI card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Badge {
    /// Signed change, colored by sign.
    Delta { pct: f64, digits: usize },
    /// Muted caption.
    Note(&'static str),
    Status(TxStatus),
}

#[derive(Clone, Debug, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    /// Already formatted.
    pub value: String,
    pub badge: Badge,
}

/// Everything a page reads. Defaults to the built-in mock datasets.
#[derive(Clone, Debug)]
pub struct DashboardData {
    pub kpis: Kpis,
    pub recent: Vec<ActivityGroup>,
    pub top_spender: Activity,
    pub net_profit: Vec<f64>,
    pub breakdown: Vec<ChartDatum>,
    pub daily_volumes: Vec<f64>,
    pub history: Vec<Transaction>,
    pub profit_notes: Vec<ProfitNote>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            kpis: data::kpis(),
            recent: data::recent_transactions(),
            top_spender: data::top_spender(),
            net_profit: data::net_profit_series(),
            breakdown: data::donut_breakdown(),
            daily_volumes: data::daily_volumes(),
            history: data::history_transactions(),
            profit_notes: data::profit_notes(),
        }
    }
}

impl DashboardData {
    /// Names drawn with a gradient avatar on `page`, sorted and deduplicated.
    pub fn avatar_names(&self, page: Page) -> Vec<&'static str> {
        if page != Page::Dashboard {
            return Vec::new();
        }
        let mut names: Vec<&'static str> = self.recent.iter().flat_map(|g| g.items.iter().map(|a| a.name)).collect();
        names.push(self.top_spender.name);
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// The KPI row of `page`, empty for pages without one.
pub fn kpi_cards(page: Page, data: &DashboardData) -> Vec<KpiCard> {
    let delta = |k: &data::Kpi| Badge::Delta { pct: k.delta_pct, digits: k.delta_digits };
    match page {
        Page::Dashboard => data
            .kpis
            .all()
            .into_iter()
            .map(|k| KpiCard { label: k.label, value: k.display_value(), badge: delta(k) })
            .collect(),
        Page::Revenue => {
            let revenue = &data.kpis.total_revenue;
            let last_day = data.daily_volumes.last().copied().unwrap_or(0.0);
            vec![
                KpiCard { label: revenue.label, value: revenue.display_value(), badge: delta(revenue) },
                KpiCard { label: "Daily Volume", value: format_count(last_day), badge: Badge::Note("last day") },
            ]
        }
        Page::Transactions => {
            let counts = data::count_by_status(&data.history);
            let mut cards = vec![KpiCard {
                label: "Total Transactions",
                value: format_count(data.history.len() as f64),
                badge: Badge::Note("in table"),
            }];
            for status in [TxStatus::Success, TxStatus::Processing, TxStatus::Failed] {
                cards.push(KpiCard {
                    label: status.as_str(),
                    value: format_count(counts.get(status) as f64),
                    badge: Badge::Status(status),
                });
            }
            cards
        }
        Page::History | Page::Profits => Vec::new(),
    }
}

/// Card placement for one page on a `width` x `height` canvas.
#[derive(Clone, Debug)]
pub struct PageLayout {
    pub page: Page,
    pub width: f64,
    pub height: f64,
    pub cards: Vec<(Widget, Rect)>,
}

impl PageLayout {
    pub fn new(page: Page, width: f64, height: f64, kpi_count: usize) -> Self {
        let left = SIDEBAR_WIDTH + MARGIN;
        let top = HEADER_HEIGHT + MARGIN;
        let content_w = (width - left - MARGIN).max(0.0);
        let content_h = (height - top - MARGIN).max(0.0);
        let mut cards = Vec::new();

        // KPI strip across the top; the rest of the page starts below it
        let (body_top, body_h) = if kpi_count > 0 {
            let n = kpi_count as f64;
            let kpi_w = (content_w - GUTTER * (n - 1.0)) / n;
            for i in 0..kpi_count {
                let x = left + i as f64 * (kpi_w + GUTTER);
                cards.push((Widget::Kpi(i), Rect::from_ltwh(x, top, kpi_w, KPI_ROW_HEIGHT)));
            }
            (top + KPI_ROW_HEIGHT + GUTTER, content_h - KPI_ROW_HEIGHT - GUTTER)
        } else {
            (top, content_h)
        };

        match page {
            Page::Dashboard => {
                let row_h = (body_h - GUTTER) / 2.0;
                let feed_w = (content_w - GUTTER) * 0.58;
                cards.push((Widget::ActivityFeed, Rect::from_ltwh(left, body_top, feed_w, row_h)));
                cards.push((
                    Widget::NetProfit,
                    Rect::from_ltwh(left + feed_w + GUTTER, body_top, content_w - feed_w - GUTTER, row_h),
                ));
                let half = (content_w - GUTTER) / 2.0;
                let row2 = body_top + row_h + GUTTER;
                cards.push((Widget::Breakdown, Rect::from_ltwh(left, row2, half, row_h)));
                cards.push((Widget::DailyVolume, Rect::from_ltwh(left + half + GUTTER, row2, half, row_h)));
            }
            Page::Revenue => {
                let narrow = (content_w - GUTTER) / 3.0;
                cards.push((Widget::Breakdown, Rect::from_ltwh(left, body_top, narrow, body_h)));
                cards.push((
                    Widget::DailyRevenue,
                    Rect::from_ltwh(left + narrow + GUTTER, body_top, content_w - narrow - GUTTER, body_h),
                ));
            }
            Page::History => {
                cards.push((Widget::TransactionTable, Rect::from_ltwh(left, body_top, content_w, body_h)));
            }
            Page::Profits => {
                let half = (content_w - GUTTER) / 2.0;
                cards.push((Widget::NetProfit, Rect::from_ltwh(left, body_top, half, body_h)));
                cards.push((Widget::ProfitNotes, Rect::from_ltwh(left + half + GUTTER, body_top, half, body_h)));
            }
            Page::Transactions => {
                let side = (content_w - GUTTER) / 4.0;
                let filter_h = CARD_TITLE_HEIGHT + 4.0 * FILTER_ROW_HEIGHT + GUTTER;
                let breakdown_h = CARD_TITLE_HEIGHT + 3.0 * STATUS_ROW_HEIGHT + GUTTER;
                cards.push((Widget::StatusFilter, Rect::from_ltwh(left, body_top, side, filter_h)));
                cards.push((
                    Widget::StatusBreakdown,
                    Rect::from_ltwh(left, body_top + filter_h + GUTTER, side, breakdown_h),
                ));
                cards.push((
                    Widget::TransactionTable,
                    Rect::from_ltwh(left + side + GUTTER, body_top, content_w - side - GUTTER, body_h),
                ));
            }
        }
        Self { page, width, height, cards }
    }

    /// Body of a card: below its title strip and headline, inset by the gutter.
    pub fn content_area(widget: Widget, card: &Rect) -> Rect {
        let head = if widget.title().is_empty() { GUTTER } else { CARD_TITLE_HEIGHT };
        Rect::from_ltrb(
            card.left + GUTTER,
            card.top + head + widget.lead_height(),
            card.right - GUTTER,
            card.bottom - GUTTER,
        )
    }
}

/// Donut widget filling `area`, radii shrunk proportionally when it is too small.
pub fn donut_view(area: &Rect, data: &[ChartDatum], cfg: &DonutConfig) -> DonutChartView {
    let legend_h = LEGEND_ROW_HEIGHT * data.len() as f64;
    let room = ((area.width().min(area.height() - legend_h)) / 2.0 - cfg.lift).max(1.0);
    let scale = (room / cfg.outer_radius).min(1.0);
    let sized = DonutConfig { outer_radius: cfg.outer_radius * scale, inner_radius: cfg.inner_radius * scale, ..*cfg };
    let cx = area.width() / 2.0;
    let cy = sized.outer_radius + sized.lift;
    DonutChartView::new(data, &sized, cx, cy)
}

pub fn line_view(area: &Rect, values: &[f64], cfg: &LineConfig) -> LineChartView {
    LineChartView::new(values, area.width(), area.height(), cfg)
}

pub fn bar_view(area: &Rect, values: &[f64], cfg: &BarConfig) -> BarChartView {
    BarChartView::new(values, area.width(), area.height(), cfg)
}
