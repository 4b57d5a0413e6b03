// File: crates/finboard-core/src/svg.rs
// Summary: SVG renderers for the dashboard widgets and full pages (string output, no DOM).

use std::fmt::Write as _;

use tracing::debug;

use crate::color::{avatar_gradient, seed_hash, Rgb};
use crate::config::DashboardConfig;
use crate::data::{
    count_by_status, date_label, filter_by_status, Activity, ActivityGroup, ProfitNote, StatusCounts, StatusFilter,
    Transaction, TxStatus,
};
use crate::format::{format_money, format_percent, format_percent_digits};
use crate::geometry::Rect;
use crate::icons::{IconName, Ink};
use crate::interaction::{focus_item, BarChartView, DonutChartView, Interactive, KpiStrip, LineChartView, Tooltip};
use crate::page::{
    bar_view, donut_view, kpi_cards, line_view, Badge, DashboardData, KpiCard, Page, PageLayout, Widget,
    CARD_TITLE_HEIGHT, FILTER_ROW_HEIGHT, GUTTER, HEADER_HEIGHT, LEGEND_ROW_HEIGHT, MARGIN, SIDEBAR_WIDTH,
    STATUS_ROW_HEIGHT,
};
use crate::path::fmt_num;
use crate::scale::linspace;
use crate::theme::Theme;

const FONT: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";
const FEED_ROW_HEIGHT: f64 = 40.0;
const TABLE_HEADER_HEIGHT: f64 = 40.0;
const TABLE_ROW_HEIGHT: f64 = 52.0;
const SPENDER_PANEL_WIDTH: f64 = 180.0;
const PAGER_HEIGHT: f64 = 44.0;
/// Page buttons shown under the history table.
const PAGER_PAGES: usize = 6;
const TOOLTIP_WIDTH: f64 = 170.0;

pub const EMPTY_TABLE_MESSAGE: &str = "No transactions match this filter.";

/// Escape text for element content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn hex(c: Rgb) -> String {
    c.to_hex()
}

/// Interactive state applied when a page is rendered (as if set by keyboard).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    pub donut: Option<usize>,
    pub line: Option<usize>,
    pub bar: Option<usize>,
    /// Focused card of the KPI row.
    pub kpi: Option<usize>,
    /// Rows shown by the transactions table.
    pub filter: StatusFilter,
}

/// Icon scaled to `size` pixels with its top-left at `(x, y)`, painted in `color`.
pub fn render_icon(icon: IconName, x: f64, y: f64, size: f64, color: Rgb) -> String {
    let glyph = icon.glyph();
    let scale = size / glyph.view_box.2 as f64;
    let c = hex(color);
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<g class="icon icon-{name}" transform="translate({x},{y}) scale({s})" fill="none" stroke-linecap="round" stroke-linejoin="round">"#,
        name = icon.as_str(),
        x = fmt_num(x),
        y = fmt_num(y),
        s = fmt_num(scale),
    );
    for part in glyph.parts {
        let paint = match part.ink {
            Ink::Fill => format!(r#"fill="{c}""#),
            Ink::Stroke(w) => format!(r#"stroke="{c}" stroke-width="{}""#, fmt_num(w as f64)),
        };
        let _ = write!(out, r#"<path d="{d}" {paint} opacity="{o}"/>"#, d = part.d, o = fmt_num(part.opacity as f64));
    }
    out.push_str("</g>");
    out
}

/// Dark label/value box centred on `cx`, top edge at `top`.
fn render_tooltip(out: &mut String, tip: &Tooltip, cx: f64, top: f64, theme: &Theme) {
    let left = cx - TOOLTIP_WIDTH / 2.0;
    let _ = write!(
        out,
        r#"<g class="tooltip"><rect x="{x}" y="{y}" width="{w}" height="42" rx="12" fill="{bg}" fill-opacity="0.9"/>"#,
        x = fmt_num(left),
        y = fmt_num(top),
        w = fmt_num(TOOLTIP_WIDTH),
        bg = hex(theme.sidebar)
    );
    for (row, (label, value)) in tip.rows.iter().enumerate() {
        let y = top + 17.0 + row as f64 * 15.0;
        let _ = write!(
            out,
            r#"<text x="{l}" y="{y}" font-size="10" fill="{m}">{label}</text><text x="{r}" y="{y}" text-anchor="end" font-size="10" font-weight="600" fill="{fg}">{value}</text>"#,
            l = fmt_num(left + 10.0),
            r = fmt_num(left + TOOLTIP_WIDTH - 10.0),
            y = fmt_num(y),
            m = hex(theme.text_muted),
            fg = hex(theme.surface),
            label = escape_xml(label),
            value = escape_xml(value)
        );
    }
    out.push_str("</g>");
}

/// Donut ring with legend underneath, in widget-local coordinates. The hovered slice
/// gets a category/revenue tooltip priced against `total_revenue`.
pub fn render_donut(view: &DonutChartView, theme: &Theme, width: f64, total_revenue: f64) -> String {
    let mut out = String::new();
    out.push_str(r#"<g class="donut">"#);
    for (pos, slice) in view.slices.iter().enumerate() {
        let (dx, dy) = view.offset_for(pos);
        let geom = slice.geometry(view.cx + dx, view.cy + dy, view.outer_radius, view.inner_radius);
        let active = view.selection().is_active(pos);
        let _ = write!(
            out,
            r#"<path class="slice{cls}" data-label="{label}" d="{d}" fill="{fill}"/>"#,
            cls = if active { " active" } else { "" },
            label = escape_xml(&slice.label),
            d = geom.path.to_svg_d(),
            fill = hex(theme.slice_color(slice.index))
        );
    }

    let legend_top = view.cy + view.outer_radius + view.lift + 12.0;
    for (row, slice) in view.slices.iter().enumerate() {
        let y = legend_top + row as f64 * LEGEND_ROW_HEIGHT;
        let _ = write!(
            out,
            r#"<rect x="0" y="{y}" width="10" height="10" rx="3" fill="{fill}"/><text x="18" y="{ty}" font-size="12" fill="{c}">{label}</text><text x="{w}" y="{ty}" text-anchor="end" font-size="12" fill="{m}">{pct:.1}%</text>"#,
            y = fmt_num(y),
            ty = fmt_num(y + 9.0),
            w = fmt_num(width),
            fill = hex(theme.slice_color(slice.index)),
            c = hex(theme.text),
            m = hex(theme.text_muted),
            label = escape_xml(&slice.label),
            pct = slice.fraction * 100.0
        );
    }

    if let (Some(slice), Some(tip)) = (view.active_slice(), view.tooltip(total_revenue)) {
        let (x, _) = slice.anchor(view.cx, view.cy, view.outer_radius);
        render_tooltip(&mut out, &tip, x, 10.0, theme);
    }
    out.push_str("</g>");
    out
}

/// Line chart with quarter grid lines, gradient area, smooth stroke, sample dots and an
/// optional hover marker.
pub fn render_line_chart(view: &LineChartView, theme: &Theme, id: &str) -> String {
    let layout = &view.layout;
    let vp = layout.viewport;
    let mut out = String::new();
    let grad_id = format!("{}-area", escape_xml(id));
    let _ = write!(
        out,
        r#"<g class="line-chart"><defs><linearGradient id="{g}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{a}" stop-opacity="0.28"/><stop offset="100%" stop-color="{a}" stop-opacity="0"/></linearGradient></defs>"#,
        g = grad_id,
        a = hex(theme.accent)
    );
    for y in linspace(vp.padding, vp.baseline(), 5).into_iter().skip(1).take(3) {
        let _ = write!(
            out,
            r#"<line x1="{l}" x2="{r}" y1="{y}" y2="{y}" stroke="{c}"/>"#,
            l = fmt_num(vp.padding),
            r = fmt_num(vp.width - vp.padding),
            y = fmt_num(y),
            c = hex(theme.grid)
        );
    }
    if !layout.is_empty() {
        let _ = write!(
            out,
            r#"<path class="area" d="{d}" fill="url(#{g})"/><path class="stroke" d="{s}" fill="none" stroke="{a}" stroke-width="2.2" stroke-linecap="round"/>"#,
            d = layout.area_path().to_svg_d(),
            g = grad_id,
            s = layout.stroke_path().to_svg_d(),
            a = hex(theme.accent)
        );
        for p in &layout.points {
            let _ = write!(
                out,
                r#"<circle cx="{x}" cy="{y}" r="4.2" fill="{a}" fill-opacity="0.25"/><circle cx="{x}" cy="{y}" r="2.2" fill="{a}"/>"#,
                x = fmt_num(p.x),
                y = fmt_num(p.y),
                a = hex(theme.accent)
            );
        }
    }
    if let Some(p) = view.active_point() {
        let value = layout.y_scale.from_px(p.y);
        let _ = write!(
            out,
            r#"<g class="hover"><line x1="{x}" x2="{x}" y1="{t}" y2="{b}" stroke="{c}" stroke-dasharray="4 4"/><circle cx="{x}" cy="{y}" r="5" fill="{s}" stroke="{a}" stroke-width="2"/><text x="{x}" y="{ty}" text-anchor="middle" font-size="11" font-weight="600" fill="{tc}">{v}</text></g>"#,
            x = fmt_num(p.x),
            y = fmt_num(p.y),
            t = fmt_num(vp.padding),
            b = fmt_num(vp.baseline()),
            ty = fmt_num(p.y - 12.0),
            c = hex(theme.text_muted),
            s = hex(theme.surface),
            a = hex(theme.accent),
            tc = hex(theme.text),
            v = escape_xml(&format_money(value))
        );
    }
    out.push_str("</g>");
    out
}

/// Bar chart; the hovered bar takes the active color and gets a date/revenue tooltip.
pub fn render_bar_chart(view: &BarChartView, theme: &Theme) -> String {
    let layout = &view.layout;
    let vp = layout.viewport;
    let mut out = String::new();
    out.push_str(r#"<g class="bar-chart">"#);
    let _ = write!(
        out,
        r#"<line x1="{l}" x2="{r}" y1="{b}" y2="{b}" stroke="{c}"/>"#,
        l = fmt_num(vp.padding),
        r = fmt_num(vp.width - vp.padding),
        b = fmt_num(vp.baseline()),
        c = hex(theme.grid)
    );
    let n = layout.bars.len();
    for bar in &layout.bars {
        let active = view.selection().is_active(bar.index);
        let r = bar.rect;
        let _ = write!(
            out,
            r#"<rect class="bar{cls}" x="{x}" y="{y}" width="{w}" height="{h}" rx="6" fill="{f}"/>"#,
            cls = if active { " active" } else { "" },
            x = fmt_num(r.left),
            y = fmt_num(r.top),
            w = fmt_num(r.width()),
            h = fmt_num(r.height()),
            f = hex(if active { theme.bar_active } else { theme.bar })
        );
        if bar.index % 2 == 0 || bar.index + 1 == n {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="10" fill="{m}">{t}</text>"#,
                x = fmt_num((r.left + r.right) / 2.0),
                y = fmt_num(vp.height - 4.0),
                m = hex(theme.text_muted),
                t = date_label(bar.index).format("%m/%d")
            );
        }
    }
    if let (Some(i), Some(tip)) = (view.selection().active, view.tooltip()) {
        if let Some(bar) = layout.bars.get(i) {
            let cx = (bar.rect.left + bar.rect.right) / 2.0;
            render_tooltip(&mut out, &tip, cx, (bar.rect.top - 50.0).max(0.0), theme);
        }
    }
    out.push_str("</g>");
    out
}

fn status_color(theme: &Theme, status: TxStatus) -> Rgb {
    match status {
        TxStatus::Success => theme.positive,
        TxStatus::Failed => theme.negative,
        TxStatus::Processing => theme.warning,
    }
}

fn pill_width(text: &str) -> f64 {
    16.0 + 6.5 * text.chars().count() as f64
}

/// Rounded label tinted by `status`, left edge at `x`, text baseline at `y`.
fn status_pill(out: &mut String, text: &str, status: TxStatus, x: f64, y: f64, theme: &Theme) {
    let c = status_color(theme, status);
    let w = pill_width(text);
    let _ = write!(
        out,
        r#"<g class="status status-{cls}"><rect x="{x}" y="{ry}" width="{w}" height="20" rx="10" fill="{c}" fill-opacity="0.15"/><text x="{tx}" y="{y}" text-anchor="middle" font-size="11" font-weight="600" fill="{c}">{t}</text></g>"#,
        cls = status.as_str().to_ascii_lowercase(),
        x = fmt_num(x),
        ry = fmt_num(y - 14.0),
        w = fmt_num(w),
        tx = fmt_num(x + w / 2.0),
        y = fmt_num(y),
        c = hex(c),
        t = escape_xml(text)
    );
}

pub fn render_kpi_card(card: &KpiCard, rect: &Rect, theme: &Theme, focused: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<g class="kpi{cls}"><text x="{x}" y="{y1}" font-size="13" fill="{m}">{label}</text><text x="{x}" y="{y2}" font-size="26" font-weight="700" fill="{c}">{value}</text>"#,
        cls = if focused { " focused" } else { "" },
        x = fmt_num(rect.left + GUTTER),
        y1 = fmt_num(rect.top + 32.0),
        y2 = fmt_num(rect.top + 76.0),
        m = hex(theme.text_muted),
        c = hex(theme.text),
        label = escape_xml(card.label),
        value = escape_xml(&card.value)
    );
    let bx = rect.right - GUTTER;
    let by = rect.top + 74.0;
    match card.badge {
        Badge::Delta { pct, digits } => {
            let color = if pct >= 0.0 { theme.positive } else { theme.negative };
            let _ = write!(
                out,
                r#"<text class="delta" x="{x}" y="{y}" text-anchor="end" font-size="12" font-weight="600" fill="{d}">{t}</text>"#,
                x = fmt_num(bx),
                y = fmt_num(by),
                d = hex(color),
                t = escape_xml(&format_percent_digits(pct, digits))
            );
        }
        Badge::Note(note) => {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y}" text-anchor="end" font-size="11" fill="{m}">{t}</text>"#,
                x = fmt_num(bx),
                y = fmt_num(by),
                m = hex(theme.text_muted),
                t = escape_xml(note)
            );
        }
        Badge::Status(status) => {
            let text = status.as_str();
            status_pill(&mut out, text, status, bx - pill_width(text), by, theme);
        }
    }
    if focused {
        let _ = write!(
            out,
            r#"<rect class="focus-ring" x="{x}" y="{y}" width="{w}" height="{h}" rx="12" fill="none" stroke="{a}" stroke-width="2"/>"#,
            x = fmt_num(rect.left),
            y = fmt_num(rect.top),
            w = fmt_num(rect.width()),
            h = fmt_num(rect.height()),
            a = hex(theme.accent)
        );
    }
    out.push_str("</g>");
    out
}

/// Gradient id for an avatar. Keyed on the seed hash, so two names share an id only
/// when they also share colors.
pub fn avatar_id(name: &str) -> String {
    format!("avatar-{:08x}", seed_hash(name))
}

/// One `<defs>` block holding a gradient per distinct avatar id among `names`.
pub fn render_avatar_defs(names: &[&str]) -> String {
    let mut out = String::new();
    let mut seen: Vec<String> = Vec::new();
    out.push_str("<defs>");
    for name in names {
        let id = avatar_id(name);
        if seen.contains(&id) {
            continue;
        }
        let (a, b) = avatar_gradient(name);
        let _ = write!(
            out,
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{a}" stop-opacity="0.95"/><stop offset="100%" stop-color="{b}" stop-opacity="0.95"/></linearGradient>"#,
            a = hex(a),
            b = hex(b)
        );
        seen.push(id);
    }
    out.push_str("</defs>");
    out
}

/// Rounded square filled with the name's gradient; the defs come from [`render_avatar_defs`].
fn render_avatar(out: &mut String, name: &str, x: f64, y: f64, size: f64) {
    let _ = write!(
        out,
        r#"<rect class="avatar" x="{x}" y="{y}" width="{s}" height="{s}" rx="{r}" fill="url(#{id})"/>"#,
        x = fmt_num(x),
        y = fmt_num(y),
        s = fmt_num(size),
        r = fmt_num(size * 0.3),
        id = avatar_id(name)
    );
}

/// Amount over a small delta chip, right-aligned at `right`.
fn amount_with_delta(out: &mut String, amount: f64, delta_pct: f64, right: f64, y: f64, theme: &Theme) {
    let _ = write!(
        out,
        r#"<text x="{r}" y="{y1}" text-anchor="end" font-size="13" font-weight="600" fill="{c}">{amount}</text><text class="chip" x="{r}" y="{y2}" text-anchor="end" font-size="10" font-weight="600" fill="{p}">{delta}</text>"#,
        r = fmt_num(right),
        y1 = fmt_num(y),
        y2 = fmt_num(y + 15.0),
        c = hex(theme.text),
        p = hex(if delta_pct >= 0.0 { theme.positive } else { theme.negative }),
        amount = escape_xml(&format_money(amount)),
        delta = escape_xml(&format_percent(delta_pct))
    );
}

/// Day-grouped activity rows on the left of `area`, the top spender panel on the right.
pub fn render_activity_feed(groups: &[ActivityGroup], spender: &Activity, area: &Rect, theme: &Theme) -> String {
    let list_right = area.right - SPENDER_PANEL_WIDTH - GUTTER;
    let mut out = String::new();
    out.push_str(r#"<g class="activity">"#);
    let mut y = area.top;
    'groups: for group in groups {
        if y + 24.0 > area.bottom {
            break;
        }
        let _ = write!(
            out,
            r#"<rect class="date-chip" x="{x}" y="{y}" width="120" height="20" rx="10" fill="{g}"/><text x="{tx}" y="{ty}" text-anchor="middle" font-size="10" fill="{m}">{d}</text>"#,
            x = fmt_num(area.left),
            y = fmt_num(y),
            tx = fmt_num(area.left + 60.0),
            ty = fmt_num(y + 14.0),
            g = hex(theme.grid),
            m = hex(theme.text_muted),
            d = escape_xml(group.date)
        );
        y += 28.0;
        for item in &group.items {
            if y + FEED_ROW_HEIGHT > area.bottom {
                break 'groups;
            }
            render_avatar(&mut out, item.name, area.left, y + 4.0, 30.0);
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y1}" font-size="13" font-weight="600" fill="{c}">{name}</text><text x="{x}" y="{y2}" font-size="11" fill="{m}">{handle}</text>"#,
                x = fmt_num(area.left + 40.0),
                y1 = fmt_num(y + 17.0),
                y2 = fmt_num(y + 32.0),
                c = hex(theme.text),
                m = hex(theme.text_muted),
                name = escape_xml(item.name),
                handle = escape_xml(item.handle)
            );
            amount_with_delta(&mut out, item.amount, item.delta_pct, list_right, y + 17.0, theme);
            y += FEED_ROW_HEIGHT;
        }
        y += 8.0;
    }

    let px = area.right - SPENDER_PANEL_WIDTH;
    let _ = write!(
        out,
        r#"<g class="top-spender"><rect x="{px}" y="{t}" width="{w}" height="{h}" rx="12" fill="{g}"/><text x="{tx}" y="{by}" font-size="10" font-weight="600" fill="{m}">Top Spenders</text>"#,
        px = fmt_num(px),
        t = fmt_num(area.top),
        w = fmt_num(SPENDER_PANEL_WIDTH),
        h = fmt_num(area.height().min(200.0)),
        tx = fmt_num(px + 14.0),
        by = fmt_num(area.top + 22.0),
        g = hex(theme.grid),
        m = hex(theme.text_muted)
    );
    render_avatar(&mut out, spender.name, px + 14.0, area.top + 34.0, 56.0);
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y1}" font-size="14" font-weight="700" fill="{c}">{name}</text><text x="{x}" y="{y2}" font-size="11" fill="{m}">{handle}</text>"#,
        x = fmt_num(px + 14.0),
        y1 = fmt_num(area.top + 112.0),
        y2 = fmt_num(area.top + 128.0),
        c = hex(theme.text),
        m = hex(theme.text_muted),
        name = escape_xml(spender.name),
        handle = escape_xml(spender.handle)
    );
    amount_with_delta(&mut out, spender.amount, spender.delta_pct, area.right - 14.0, area.top + 158.0, theme);
    out.push_str("</g></g>");
    out
}

pub fn render_profit_notes(notes: &[ProfitNote], area: &Rect, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(r#"<g class="profit-notes">"#);
    for (row, note) in notes.iter().enumerate() {
        let y = area.top + row as f64 * 52.0;
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y1}" font-size="13" font-weight="600" fill="{c}">{title}</text><text x="{x}" y="{y2}" font-size="11" fill="{m}">{detail}</text><text class="tag" x="{r}" y="{y1}" text-anchor="end" font-size="11" font-weight="600" fill="{c}">{tag}</text>"#,
            x = fmt_num(area.left),
            r = fmt_num(area.right),
            y1 = fmt_num(y + 18.0),
            y2 = fmt_num(y + 34.0),
            c = hex(theme.text),
            m = hex(theme.text_muted),
            title = escape_xml(note.title),
            detail = escape_xml(note.detail),
            tag = escape_xml(&format_percent(note.delta_pct))
        );
    }
    out.push_str("</g>");
    out
}

/// One pill per filter with its row count; the current one is pressed.
pub fn render_status_filter(counts: &StatusCounts, current: StatusFilter, area: &Rect, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(r#"<g class="status-filter">"#);
    for (row, filter) in StatusFilter::ALL.into_iter().enumerate() {
        let y = area.top + row as f64 * FILTER_ROW_HEIGHT;
        let pressed = filter == current;
        let _ = write!(
            out,
            r#"<g class="filter-pill" aria-pressed="{pressed}"><rect x="{x}" y="{y}" width="{w}" height="32" rx="16" fill="{f}" stroke="{s}"/><text x="{tx}" y="{ty}" font-size="12" fill="{c}">{label}</text><text x="{r}" y="{ty}" text-anchor="end" font-size="11" fill="{m}">{n}</text></g>"#,
            x = fmt_num(area.left),
            y = fmt_num(y),
            w = fmt_num(area.width()),
            f = hex(if pressed { theme.grid } else { theme.surface }),
            s = hex(if pressed { theme.text_muted } else { theme.border }),
            tx = fmt_num(area.left + 14.0),
            ty = fmt_num(y + 20.0),
            r = fmt_num(area.right - 14.0),
            c = hex(if pressed { theme.text } else { theme.text_muted }),
            m = hex(theme.text_muted),
            label = filter.label(),
            n = counts.for_filter(filter)
        );
    }
    out.push_str("</g>");
    out
}

pub fn render_status_breakdown(counts: &StatusCounts, area: &Rect, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(r#"<g class="status-breakdown">"#);
    for (row, status) in [TxStatus::Success, TxStatus::Processing, TxStatus::Failed].into_iter().enumerate() {
        let y = area.top + row as f64 * STATUS_ROW_HEIGHT + 20.0;
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="12" fill="{m}">{label}</text>"#,
            x = fmt_num(area.left),
            y = fmt_num(y),
            m = hex(theme.text_muted),
            label = status.as_str()
        );
        let n = counts.get(status).to_string();
        status_pill(&mut out, &n, status, area.right - pill_width(&n), y, theme);
    }
    out.push_str("</g>");
    out
}

/// Sender / recipient / value / status / edit table. Rows that do not fit are cut off;
/// an empty `rows` shows [`EMPTY_TABLE_MESSAGE`].
pub fn render_transaction_table(rows: &[&Transaction], area: &Rect, theme: &Theme) -> String {
    let w = area.width();
    let cols = [0.0, 0.26, 0.52, 0.72, 0.92].map(|f| area.left + f * w);
    let mut out = String::new();
    out.push_str(r#"<g class="tx-table">"#);
    for (x, head) in cols.iter().zip(["Sender", "Recipient", "Value", "Transaction Status", "Edit"]) {
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="11" font-weight="600" fill="{m}">{head}</text>"#,
            x = fmt_num(*x),
            y = fmt_num(area.top + 24.0),
            m = hex(theme.text_muted)
        );
    }
    let body_top = area.top + TABLE_HEADER_HEIGHT;
    let fit = ((area.bottom - body_top) / TABLE_ROW_HEIGHT).floor().max(0.0) as usize;
    for (row, tx) in rows.iter().take(fit).enumerate() {
        let y = body_top + row as f64 * TABLE_ROW_HEIGHT;
        let _ = write!(
            out,
            r#"<line x1="{l}" x2="{r}" y1="{y}" y2="{y}" stroke="{b}"/>"#,
            l = fmt_num(area.left),
            r = fmt_num(area.right),
            y = fmt_num(y),
            b = hex(theme.border)
        );
        let cells = [
            (tx.sender.name.to_string(), tx.sender.handle),
            (tx.recipient.name.to_string(), tx.recipient.handle),
            (format_money(tx.amount), tx.card_ref),
        ];
        for (x, (main, sub)) in cols.iter().zip(cells.iter()) {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y1}" font-size="13" font-weight="600" fill="{c}">{main}</text><text x="{x}" y="{y2}" font-size="11" fill="{m}">{sub}</text>"#,
                x = fmt_num(*x),
                y1 = fmt_num(y + 22.0),
                y2 = fmt_num(y + 38.0),
                c = hex(theme.text),
                m = hex(theme.text_muted),
                main = escape_xml(main),
                sub = escape_xml(sub)
            );
        }
        status_pill(&mut out, tx.status.as_str(), tx.status, cols[3], y + 30.0, theme);
        out.push_str(&render_icon(IconName::Pencil, cols[4], y + 18.0, 16.0, theme.text_muted));
    }
    if rows.is_empty() {
        let _ = write!(
            out,
            r#"<text class="empty" x="{x}" y="{y}" font-size="12" fill="{m}">{t}</text>"#,
            x = fmt_num(area.left),
            y = fmt_num(body_top + 28.0),
            m = hex(theme.text_muted),
            t = escape_xml(EMPTY_TABLE_MESSAGE)
        );
    }
    out.push_str("</g>");
    out
}

/// `<< 1 2 3 4 5 6 >>` centred at the bottom of `area`, first page current.
fn render_pager(out: &mut String, area: &Rect, theme: &Theme) {
    let labels: Vec<String> = std::iter::once("<<".to_string())
        .chain((1..=PAGER_PAGES).map(|p| p.to_string()))
        .chain(std::iter::once(">>".to_string()))
        .collect();
    let step = 34.0;
    let total = step * labels.len() as f64 - 6.0;
    let left = (area.left + area.right - total) / 2.0;
    let y = area.bottom - PAGER_HEIGHT + 8.0;
    out.push_str(r#"<g class="pager">"#);
    for (i, label) in labels.iter().enumerate() {
        let x = left + i as f64 * step;
        let current = i == 1;
        let _ = write!(
            out,
            r#"<rect x="{x}" y="{y}" width="28" height="28" rx="8" fill="{f}"/><text x="{tx}" y="{ty}" text-anchor="middle" font-size="11" fill="{c}">{t}</text>"#,
            x = fmt_num(x),
            y = fmt_num(y),
            tx = fmt_num(x + 14.0),
            ty = fmt_num(y + 18.0),
            f = hex(if current { theme.border } else { theme.grid }),
            c = hex(if current { theme.text } else { theme.text_muted }),
            t = escape_xml(label)
        );
    }
    out.push_str("</g>");
}

pub fn render_sidebar(active: Page, height: f64, theme: &Theme) -> String {
    let white = Rgb::new(255, 255, 255);
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<g class="sidebar"><rect x="0" y="0" width="{w}" height="{h}" fill="{bg}"/>"#,
        w = fmt_num(SIDEBAR_WIDTH),
        h = fmt_num(height),
        bg = hex(theme.sidebar)
    );
    out.push_str(&render_icon(IconName::Spark, MARGIN, 22.0, 28.0, white));
    let _ = write!(
        out,
        r#"<text x="{x}" y="42" font-size="18" font-weight="800" letter-spacing="2" fill="{c}">NUEXA</text>"#,
        x = fmt_num(MARGIN + 38.0),
        c = hex(white)
    );
    for (i, page) in Page::ALL.iter().enumerate() {
        let y = 88.0 + i as f64 * 48.0;
        let is_active = *page == active;
        if is_active {
            let _ = write!(
                out,
                r#"<rect x="12" y="{y}" width="{w}" height="38" rx="8" fill="{a}"/>"#,
                y = fmt_num(y),
                w = fmt_num(SIDEBAR_WIDTH - 24.0),
                a = hex(theme.accent)
            );
        }
        let fg = if is_active { white } else { theme.text_muted };
        out.push_str(&render_icon(page.icon(), MARGIN, y + 10.0, 18.0, fg));
        let _ = write!(
            out,
            r#"<text x="{x}" y="{ty}" font-size="14" font-weight="600" fill="{c}">{t}</text>"#,
            x = fmt_num(MARGIN + 30.0),
            ty = fmt_num(y + 24.0),
            c = hex(fg),
            t = page.title()
        );
    }
    out.push_str(&render_icon(IconName::Logout, MARGIN, height - 52.0, 18.0, theme.text_muted));
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" font-size="14" font-weight="600" fill="{c}">Logout</text></g>"#,
        x = fmt_num(MARGIN + 30.0),
        y = fmt_num(height - 38.0),
        c = hex(theme.text_muted)
    );
    out
}

/// Page title with the filter and sort pills on the right.
pub fn render_top_bar(page: Page, width: f64, theme: &Theme) -> String {
    let mut out = String::new();
    let pill_y = HEADER_HEIGHT - 38.0;
    let sort_x = width - MARGIN - 86.0;
    let filter_x = sort_x - 8.0 - 36.0;
    let _ = write!(
        out,
        r#"<g class="top-bar"><text x="{x}" y="{y}" font-size="24" font-weight="800" fill="{c}">{t}</text><rect x="{fx}" y="{py}" width="36" height="30" rx="15" fill="{s}" stroke="{b}"/><rect x="{sx}" y="{py}" width="86" height="30" rx="15" fill="{s}" stroke="{b}"/><text x="{stx}" y="{pty}" font-size="11" fill="{m}">Sort By</text>"#,
        x = fmt_num(SIDEBAR_WIDTH + MARGIN),
        y = fmt_num(HEADER_HEIGHT - 8.0),
        c = hex(theme.text),
        t = page.title(),
        fx = fmt_num(filter_x),
        sx = fmt_num(sort_x),
        py = fmt_num(pill_y),
        stx = fmt_num(sort_x + 12.0),
        pty = fmt_num(pill_y + 19.0),
        s = hex(theme.surface),
        b = hex(theme.border),
        m = hex(theme.text_muted)
    );
    out.push_str(&render_icon(IconName::Filter, filter_x + 10.0, pill_y + 7.0, 16.0, theme.text_muted));
    out.push_str(&render_icon(IconName::ChevDown, sort_x + 62.0, pill_y + 7.0, 16.0, theme.text_muted));
    out.push_str("</g>");
    out
}

fn card_frame(out: &mut String, widget: Widget, rect: &Rect, theme: &Theme) {
    let _ = write!(
        out,
        r#"<rect class="card" x="{x}" y="{y}" width="{w}" height="{h}" rx="12" fill="{f}" stroke="{s}"/>"#,
        x = fmt_num(rect.left),
        y = fmt_num(rect.top),
        w = fmt_num(rect.width()),
        h = fmt_num(rect.height()),
        f = hex(theme.surface),
        s = hex(theme.border)
    );
    if !widget.title().is_empty() {
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="14" font-weight="700" fill="{c}">{t}</text>"#,
            x = fmt_num(rect.left + GUTTER),
            y = fmt_num(rect.top + CARD_TITLE_HEIGHT / 2.0 + 6.0),
            c = hex(theme.text),
            t = escape_xml(widget.title())
        );
    }
}

/// Headline figure, and an optional caption, in the lead strip under a card title.
fn card_lead(out: &mut String, rect: &Rect, value: &str, caption: Option<&str>, theme: &Theme) {
    let top = rect.top + CARD_TITLE_HEIGHT;
    let _ = write!(
        out,
        r#"<text class="lead" x="{x}" y="{y}" font-size="22" font-weight="700" fill="{c}">{v}</text>"#,
        x = fmt_num(rect.left + GUTTER),
        y = fmt_num(top + 18.0),
        c = hex(theme.text),
        v = escape_xml(value)
    );
    if let Some(caption) = caption {
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" font-size="11" fill="{m}">{t}</text>"#,
            x = fmt_num(rect.left + GUTTER),
            y = fmt_num(top + 38.0),
            m = hex(theme.text_muted),
            t = escape_xml(caption)
        );
    }
}

fn translate(out: &mut String, area: &Rect, body: &str) {
    let _ = write!(
        out,
        r#"<g transform="translate({x},{y})">{body}</g>"#,
        x = fmt_num(area.left),
        y = fmt_num(area.top)
    );
}

/// Full SVG document for one page.
pub fn render_page(page: Page, data: &DashboardData, cfg: &DashboardConfig, highlights: &Highlights) -> String {
    let theme = cfg.theme();
    let (w, h) = (cfg.canvas.width as f64, cfg.canvas.height as f64);
    let mut strip = KpiStrip::new(kpi_cards(page, data));
    focus_item(&mut strip, highlights.kpi);
    let layout = PageLayout::new(page, w, h, strip.cards.len());
    let counts = count_by_status(&data.history);
    debug!(page = page.slug(), cards = layout.cards.len(), "rendering page svg");

    let mut out = String::with_capacity(32 * 1024);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}" role="img" aria-label="{title}">"#,
        w = fmt_num(w),
        h = fmt_num(h),
        font = FONT,
        title = page.title()
    );
    let avatars = data.avatar_names(page);
    if !avatars.is_empty() {
        out.push_str(&render_avatar_defs(&avatars));
    }
    let _ = write!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(theme.background));
    out.push_str(&render_sidebar(page, h, &theme));
    out.push_str(&render_top_bar(page, w, &theme));

    for (widget, rect) in &layout.cards {
        card_frame(&mut out, *widget, rect, &theme);
        let area = PageLayout::content_area(*widget, rect);
        match *widget {
            Widget::Kpi(i) => {
                if let Some(card) = strip.cards.get(i) {
                    out.push_str(&render_kpi_card(card, rect, &theme, strip.selection().is_active(i)));
                }
            }
            Widget::ActivityFeed => {
                out.push_str(&render_activity_feed(&data.recent, &data.top_spender, &area, &theme));
            }
            Widget::NetProfit => {
                let profit = &data.kpis.net_profit;
                let caption =
                    (page == Page::Profits).then(|| format!("{} vs previous", format_percent(profit.delta_pct)));
                card_lead(&mut out, rect, &profit.display_value(), caption.as_deref(), &theme);
                let mut view = line_view(&area, &data.net_profit, &cfg.line);
                focus_item(&mut view, highlights.line);
                translate(&mut out, &area, &render_line_chart(&view, &theme, "net-profit"));
            }
            Widget::Breakdown => {
                let mut view = donut_view(&area, &data.breakdown, &cfg.donut);
                focus_item(&mut view, highlights.donut);
                let body = render_donut(&view, &theme, area.width(), data.kpis.total_revenue.value);
                translate(&mut out, &area, &body);
            }
            Widget::DailyVolume | Widget::DailyRevenue => {
                if *widget == Widget::DailyRevenue {
                    let revenue = data.kpis.total_revenue.display_value();
                    card_lead(&mut out, rect, &revenue, Some("bars are scaled to the series maximum"), &theme);
                }
                let mut view = bar_view(&area, &data.daily_volumes, &cfg.bar);
                focus_item(&mut view, highlights.bar);
                translate(&mut out, &area, &render_bar_chart(&view, &theme));
            }
            Widget::ProfitNotes => out.push_str(&render_profit_notes(&data.profit_notes, &area, &theme)),
            Widget::StatusFilter => {
                out.push_str(&render_status_filter(&counts, highlights.filter, &area, &theme));
            }
            Widget::StatusBreakdown => out.push_str(&render_status_breakdown(&counts, &area, &theme)),
            Widget::TransactionTable => {
                if page == Page::History {
                    let rows: Vec<&Transaction> = data.history.iter().collect();
                    let table = Rect::from_ltrb(area.left, area.top, area.right, area.bottom - PAGER_HEIGHT);
                    out.push_str(&render_transaction_table(&rows, &table, &theme));
                    render_pager(&mut out, &area, &theme);
                } else {
                    let rows = filter_by_status(&data.history, highlights.filter);
                    debug!(filter = highlights.filter.label(), rows = rows.len(), "filtered transactions");
                    out.push_str(&render_transaction_table(&rows, &area, &theme));
                }
            }
        }
    }
    out.push_str("</svg>");
    out
}
