// File: crates/finboard-core/src/raster.rs
// Summary: Headless PNG rendering of dashboard pages using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::info;

use crate::color::Rgb;
use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::interaction::{focus_item, BarChartView, DonutChartView, Interactive, KpiStrip, LineChartView};
use crate::page::{bar_view, donut_view, kpi_cards, line_view, DashboardData, Page, PageLayout, Widget, SIDEBAR_WIDTH};
use crate::path::{PathCmd, PathData};
use crate::scale::linspace;
use crate::svg::Highlights;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Text depends on system fonts; snapshot tests turn it off.
    pub draw_labels: bool,
    pub highlights: Highlights,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            draw_labels: true,
            highlights: Highlights::default(),
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self { width: cfg.canvas.width, height: cfg.canvas.height, theme: cfg.theme(), ..Self::default() }
    }
}

/// Render `page` to PNG bytes.
pub fn render_page_png_bytes(
    page: Page,
    data: &DashboardData,
    cfg: &DashboardConfig,
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| Error::Raster(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
    let canvas = surface.canvas();
    let theme = &opts.theme;

    canvas.clear(color(theme.background));
    fill_rect(canvas, &Rect::from_ltwh(0.0, 0.0, SIDEBAR_WIDTH, opts.height as f64), theme.sidebar);

    let mut strip = KpiStrip::new(kpi_cards(page, data));
    focus_item(&mut strip, opts.highlights.kpi);
    let layout = PageLayout::new(page, opts.width as f64, opts.height as f64, strip.cards.len());
    if opts.draw_labels {
        draw_text(canvas, page.title(), SIDEBAR_WIDTH + 24.0, 56.0, 24.0, theme.text);
    }

    for (widget, rect) in &layout.cards {
        draw_card(canvas, rect, theme);
        if opts.draw_labels && !widget.title().is_empty() {
            draw_text(canvas, widget.title(), rect.left + 16.0, rect.top + 28.0, 14.0, theme.text);
        }
        if matches!(*widget, Widget::Kpi(i) if strip.selection().is_active(i)) {
            draw_focus_ring(canvas, rect, theme);
        }
        let area = PageLayout::content_area(*widget, rect);
        canvas.save();
        canvas.translate((area.left as f32, area.top as f32));
        match *widget {
            Widget::Kpi(i) => {
                if let (true, Some(card)) = (opts.draw_labels, strip.cards.get(i)) {
                    draw_text(canvas, card.label, 0.0, 16.0, 13.0, theme.text_muted);
                    draw_text(canvas, &card.value, 0.0, 60.0, 26.0, theme.text);
                }
            }
            Widget::NetProfit => {
                let mut view = line_view(&area, &data.net_profit, &cfg.line);
                focus_item(&mut view, opts.highlights.line);
                draw_line_chart(canvas, &view, theme);
            }
            Widget::Breakdown => {
                let mut view = donut_view(&area, &data.breakdown, &cfg.donut);
                focus_item(&mut view, opts.highlights.donut);
                draw_donut(canvas, &view, theme);
            }
            Widget::DailyVolume | Widget::DailyRevenue => {
                let mut view = bar_view(&area, &data.daily_volumes, &cfg.bar);
                focus_item(&mut view, opts.highlights.bar);
                draw_bar_chart(canvas, &view, theme);
            }
            // text-only cards get their frame and title
            Widget::ActivityFeed
            | Widget::ProfitNotes
            | Widget::StatusFilter
            | Widget::StatusBreakdown
            | Widget::TransactionTable => {}
        }
        canvas.restore();
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let png = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| Error::Raster("encode PNG failed".into()))?;
    Ok(png.as_bytes().to_vec())
}

/// Render `page` to a PNG file, creating parent directories as needed.
pub fn render_page_to_png(
    page: Page,
    data: &DashboardData,
    cfg: &DashboardConfig,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_page_png_bytes(page, data, cfg, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgb) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

fn to_skia_path(path: &PathData) -> skia::Path {
    let mut p = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo { x, y } => {
                p.move_to((x as f32, y as f32));
            }
            PathCmd::LineTo { x, y } => {
                p.line_to((x as f32, y as f32));
            }
            PathCmd::CubicTo { x1, y1, x2, y2, x, y } => {
                p.cubic_to((x1 as f32, y1 as f32), (x2 as f32, y2 as f32), (x as f32, y as f32));
            }
            PathCmd::ArcTo { rx, ry, large_arc, sweep, x, y } => {
                let size = if large_arc { skia::path::ArcSize::Large } else { skia::path::ArcSize::Small };
                let dir = if sweep { skia::PathDirection::CW } else { skia::PathDirection::CCW };
                p.arc_to_rotated((rx as f32, ry as f32), 0.0, size, dir, (x as f32, y as f32));
            }
            PathCmd::Close => {
                p.close();
            }
        }
    }
    p
}

fn fill_paint(c: Rgb) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn fill_rect(canvas: &skia::Canvas, r: &Rect, c: Rgb) {
    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    canvas.draw_rect(rect, &fill_paint(c));
}

fn draw_card(canvas: &skia::Canvas, r: &Rect, theme: &Theme) {
    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    canvas.draw_round_rect(rect, 12.0, 12.0, &fill_paint(theme.surface));
    let mut border = fill_paint(theme.border);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    canvas.draw_round_rect(rect, 12.0, 12.0, &border);
}

fn draw_focus_ring(canvas: &skia::Canvas, r: &Rect, theme: &Theme) {
    let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
    let mut ring = fill_paint(theme.accent);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    canvas.draw_round_rect(rect, 12.0, 12.0, &ring);
}

fn draw_text(canvas: &skia::Canvas, text: &str, x: f64, y: f64, size: f32, c: Rgb) {
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(text, (x as f32, y as f32), &font, &fill_paint(c));
}

fn draw_line_chart(canvas: &skia::Canvas, view: &LineChartView, theme: &Theme) {
    let layout = &view.layout;
    if layout.is_empty() {
        return;
    }
    let vp = layout.viewport;
    let mut grid = fill_paint(theme.grid);
    grid.set_style(skia::paint::Style::Stroke);
    grid.set_stroke_width(1.0);
    for y in linspace(vp.padding, vp.baseline(), 5).into_iter().skip(1).take(3) {
        canvas.draw_line(
            (vp.padding as f32, y as f32),
            ((vp.width - vp.padding) as f32, y as f32),
            &grid,
        );
    }

    let mut area = fill_paint(theme.accent);
    area.set_alpha(56);
    canvas.draw_path(&to_skia_path(&layout.area_path()), &area);

    let mut stroke = fill_paint(theme.accent);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.5);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&to_skia_path(&layout.stroke_path()), &stroke);

    if let Some(p) = view.active_point() {
        canvas.draw_circle((p.x as f32, p.y as f32), 5.0, &fill_paint(theme.surface));
        stroke.set_stroke_width(2.0);
        canvas.draw_circle((p.x as f32, p.y as f32), 5.0, &stroke);
    }
}

fn draw_bar_chart(canvas: &skia::Canvas, view: &BarChartView, theme: &Theme) {
    for bar in &view.layout.bars {
        let c = if view.selection().is_active(bar.index) { theme.bar_active } else { theme.bar };
        let r = bar.rect;
        let rect = skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(c));
    }
}

fn draw_donut(canvas: &skia::Canvas, view: &DonutChartView, theme: &Theme) {
    for (pos, slice) in view.slices.iter().enumerate() {
        let (dx, dy) = view.offset_for(pos);
        let geom = slice.geometry(view.cx + dx, view.cy + dy, view.outer_radius, view.inner_radius);
        canvas.draw_path(&to_skia_path(&geom.path), &fill_paint(theme.slice_color(slice.index)));
    }
}
