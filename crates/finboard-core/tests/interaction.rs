// File: crates/finboard-core/tests/interaction.rs
// Purpose: Hover/focus selection state on the chart views and the KPI strip.

use finboard_core::config::{BarConfig, DonutConfig, LineConfig};
use finboard_core::data;
use finboard_core::interaction::{focus_item, BarChartView, DonutChartView, KpiStrip, LineChartView};
use finboard_core::page::kpi_cards;
use finboard_core::{DashboardData, Page};
use finboard_core::{Interactive, PointerEvent, Selection};

#[test]
fn line_view_follows_pointer_and_resets_on_leave() {
    let mut view = LineChartView::new(&[1.0, 2.0, 3.0], 200.0, 100.0, &LineConfig { padding: 10.0 });
    assert_eq!(view.selection(), Selection::NONE);

    view.handle_event(&PointerEvent::Enter { x: 12.0, y: 50.0 });
    assert_eq!(view.selection().active, Some(0));
    view.handle_event(&PointerEvent::Move { x: 100.0, y: 0.0 });
    assert_eq!(view.selection().active, Some(1));
    let p = view.active_point().expect("hovered point");
    assert_eq!(p.x, 100.0);

    view.handle_event(&PointerEvent::Leave);
    assert_eq!(view.selection(), Selection::NONE);
    assert!(view.active_point().is_none());
}

#[test]
fn focus_out_of_range_clears_selection() {
    let mut view = LineChartView::new(&[1.0, 2.0], 200.0, 100.0, &LineConfig::default());
    focus_item(&mut view, Some(1));
    assert!(view.selection().is_active(1));
    view.handle_event(&PointerEvent::Focus(9));
    assert_eq!(view.selection(), Selection::NONE);
    focus_item(&mut view, None);
    assert_eq!(view.selection(), Selection::NONE);
}

#[test]
fn empty_line_view_never_selects() {
    let mut view = LineChartView::new(&[], 200.0, 100.0, &LineConfig::default());
    view.handle_event(&PointerEvent::Move { x: 50.0, y: 50.0 });
    assert_eq!(view.selection(), Selection::NONE);
}

#[test]
fn bar_tooltip_shows_forward_date_and_revenue() {
    let volumes = data::daily_volumes();
    let mut view = BarChartView::new(&volumes, 600.0, 200.0, &BarConfig::default());
    assert!(view.tooltip().is_none());

    view.handle_event(&PointerEvent::Focus(volumes.len() - 1));
    let tip = view.tooltip().expect("tooltip for focused bar");
    assert_eq!(tip.rows[0], ("Date", "11/17/2007".to_string()));
    assert_eq!(tip.rows[1], ("Revenue", "$41".to_string()));

    view.handle_event(&PointerEvent::Focus(0));
    let tip = view.tooltip().expect("tooltip for first bar");
    assert_eq!(tip.rows[0].1, "11/09/2007");

    view.handle_event(&PointerEvent::Blur);
    assert!(view.tooltip().is_none());
}

#[test]
fn donut_view_hit_tests_and_lifts_hovered_slice() {
    let cfg = DonutConfig::default();
    let mut view = DonutChartView::new(&data::donut_breakdown(), &cfg, 100.0, 100.0);
    assert_eq!(view.slices.len(), 3);
    assert!(view.tooltip(56_420.0).is_none());

    // straight up from the centre, inside the ring
    view.handle_event(&PointerEvent::Move { x: 100.0, y: 23.0 });
    assert_eq!(view.selection().active, Some(0));
    assert_eq!(view.active_slice().map(|s| s.label.as_str()), Some("Sales"));
    let (dx, dy) = view.offset_for(0);
    assert!((dx.hypot(dy) - cfg.lift).abs() < 1e-9);
    assert_eq!(view.offset_for(1), (0.0, 0.0));

    // the hole in the middle hits nothing
    view.handle_event(&PointerEvent::Move { x: 100.0, y: 100.0 });
    assert_eq!(view.selection(), Selection::NONE);
}

#[test]
fn donut_tooltip_prices_each_category_against_total_revenue() {
    let mut view = DonutChartView::new(&data::donut_breakdown(), &DonutConfig::default(), 100.0, 100.0);
    let expected = [("Sales", "$34,980"), ("Fees", "$12,977"), ("Other", "$8,463")];
    for (i, (label, revenue)) in expected.into_iter().enumerate() {
        view.handle_event(&PointerEvent::Focus(i));
        let tip = view.tooltip(56_420.0).expect("tooltip for focused slice");
        assert_eq!(tip.rows, [("Category", label.to_string()), ("Revenue", revenue.to_string())]);
    }
}

#[test]
fn kpi_strip_reacts_to_focus_only() {
    let mut strip = KpiStrip::new(kpi_cards(Page::Dashboard, &DashboardData::default()));
    assert_eq!(strip.cards.len(), 4);
    strip.handle_event(&PointerEvent::Enter { x: 0.0, y: 0.0 });
    assert_eq!(strip.selection(), Selection::NONE);

    strip.handle_event(&PointerEvent::Focus(0));
    assert_eq!(strip.focused_card().map(|c| c.value.as_str()), Some("$56,420"));
    strip.handle_event(&PointerEvent::Leave);
    assert!(strip.selection().is_active(0));

    strip.handle_event(&PointerEvent::Focus(3));
    assert_eq!(strip.focused_card().map(|c| c.label), Some("Active Accounts"));

    strip.handle_event(&PointerEvent::Blur);
    assert!(strip.focused_card().is_none());
}
