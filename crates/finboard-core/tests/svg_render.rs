// File: crates/finboard-core/tests/svg_render.rs
// Purpose: SVG page output contains the expected widgets, highlights, filtering and escaping.

use finboard_core::data::{StatusFilter, TxStatus};
use finboard_core::icons::IconName;
use finboard_core::svg::{avatar_id, escape_xml, render_avatar_defs, render_icon, EMPTY_TABLE_MESSAGE};
use finboard_core::theme::Theme;
use finboard_core::{render_page, DashboardConfig, DashboardData, Highlights, Page, Rgb};

fn render(page: Page, highlights: Highlights) -> String {
    render_page(page, &DashboardData::default(), &DashboardConfig::default(), &highlights)
}

#[test]
fn dashboard_page_has_all_cards() {
    let svg = render(Page::Dashboard, Highlights::default());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"width="1280" height="860""#));
    for text in ["Net Profit", "Revenue Breakdown", "Daily Transaction Volume", "Transactions", "Total Revenue"] {
        assert!(svg.contains(text), "missing {text}");
    }
    assert_eq!(svg.matches(r#"class="card""#).count(), 8);
    assert_eq!(svg.matches(r#"<path class="slice"#).count(), 3);
    assert_eq!(svg.matches(r#"<rect class="bar"#).count(), 9);
    for text in ["$56,420", "$18,960", "342", "563", "+6.8%", "-4.8%", "-1%", "Carla Johnson", "0x242a...a4e4"] {
        assert!(svg.contains(text), "missing {text}");
    }
    assert!(svg.contains("19 November 2025"));
    assert!(svg.contains("Top Spenders"));
    assert!(!svg.contains(r#"class="tooltip""#));
}

#[test]
fn avatar_gradients_are_defined_once_per_page() {
    let svg = render(Page::Dashboard, Highlights::default());
    assert_eq!(svg.matches("<defs><linearGradient id=\"avatar-").count(), 1);
    // Carla appears in the feed and as top spender but gets one gradient
    let carla = avatar_id("Carla Johnson");
    assert_eq!(carla, "avatar-eb65b390");
    assert_eq!(svg.matches(&format!(r#"id="{carla}""#)).count(), 1);
    assert_eq!(svg.matches(&format!("url(#{carla})")).count(), 2);
    assert_eq!(svg.matches(r#"<linearGradient id="avatar-"#).count(), 4);

    // names that differ only in punctuation do not share an id
    assert_ne!(avatar_id("Ana Lee"), avatar_id("Ana-Lee"));
    let defs = render_avatar_defs(&["Ana Lee", "Ana Lee", "Ana-Lee"]);
    assert_eq!(defs.matches("<linearGradient").count(), 2);

    let history = render(Page::History, Highlights::default());
    assert!(!history.contains("avatar-"));
}

#[test]
fn transactions_page_counts_and_filters_by_status() {
    let svg = render(Page::Transactions, Highlights::default());
    for text in ["Total Transactions", "Filter", "Status Breakdown", "Card 43xxxce87", "Card 87xxxcu90"] {
        assert!(svg.contains(text), "missing {text}");
    }
    assert_eq!(svg.matches(r#"aria-pressed="true""#).count(), 1);
    assert_eq!(svg.matches(r#"class="filter-pill""#).count(), 4);
    // 3 KPI badges, 3 breakdown rows, 9 table rows
    assert_eq!(svg.matches(r#"class="status status-"#).count(), 15);
    assert_eq!(svg.matches(r#"class="status status-failed""#).count(), 3);

    let failed = render(Page::Transactions, Highlights { filter: StatusFilter::Only(TxStatus::Failed), ..Highlights::default() });
    assert!(failed.contains("Card 87xxxcu90"));
    assert!(failed.contains("Ricardo Nolan"));
    assert!(!failed.contains("Card 43xxxce87"));
    assert_eq!(failed.matches(r#"class="icon icon-pencil""#).count(), 1);
    assert!(!failed.contains(EMPTY_TABLE_MESSAGE));
}

#[test]
fn filter_with_no_matches_shows_empty_state() {
    let mut data = DashboardData::default();
    data.history.iter_mut().for_each(|tx| tx.status = TxStatus::Success);
    let highlights = Highlights { filter: StatusFilter::Only(TxStatus::Failed), ..Highlights::default() };
    let svg = render_page(Page::Transactions, &data, &DashboardConfig::default(), &highlights);
    assert!(svg.contains(r#"class="empty""#));
    assert!(svg.contains(EMPTY_TABLE_MESSAGE));
    assert!(!svg.contains("icon-pencil"));
}

#[test]
fn history_page_shows_every_row_and_a_pager() {
    let svg = render(Page::History, Highlights::default());
    assert_eq!(svg.matches(r#"class="icon icon-pencil""#).count(), 9);
    assert_eq!(svg.matches(r#"class="status status-success""#).count(), 7);
    assert!(svg.contains(r#"<g class="pager">"#));
    assert!(svg.contains("&lt;&lt;"));
    assert!(svg.contains("&gt;&gt;"));
    assert_eq!(svg.matches(r#"class="kpi"#).count(), 0);
}

#[test]
fn revenue_highlights_show_both_tooltips() {
    let highlights = Highlights { donut: Some(0), bar: Some(8), ..Highlights::default() };
    let svg = render(Page::Revenue, highlights);
    assert_eq!(svg.matches(r#"class="slice active""#).count(), 1);
    assert_eq!(svg.matches(r#"class="bar active""#).count(), 1);
    assert_eq!(svg.matches(r#"<g class="tooltip">"#).count(), 2);
    for text in ["Category", "Sales", "$34,980", "Date", "11/17/2007", "$41", "Daily Revenue", "Daily Volume"] {
        assert!(svg.contains(text), "missing {text}");
    }
}

#[test]
fn profits_page_marks_hovered_point() {
    let svg = render(Page::Profits, Highlights { line: Some(8), ..Highlights::default() });
    assert!(svg.contains(r#"<g class="hover">"#));
    assert!(svg.contains("$24"));
    assert!(svg.contains("+2.5% vs previous"));
    assert!(svg.contains("Higher conversion"));
    assert!(svg.contains("-0.2%"));
}

#[test]
fn focused_kpi_gets_a_ring() {
    let svg = render(Page::Dashboard, Highlights { kpi: Some(1), ..Highlights::default() });
    assert_eq!(svg.matches(r#"class="kpi focused""#).count(), 1);
    assert_eq!(svg.matches(r#"class="focus-ring""#).count(), 1);
    let plain = render(Page::Dashboard, Highlights { kpi: Some(7), ..Highlights::default() });
    assert!(!plain.contains("focus-ring"));
}

#[test]
fn chrome_draws_sidebar_and_top_bar_icons() {
    for page in Page::ALL {
        let svg = render(page, Highlights::default());
        assert!(svg.contains(&format!(r#"aria-label="{}""#, page.title())));
        for icon in [
            IconName::Spark,
            IconName::Grid,
            IconName::Revenue,
            IconName::History,
            IconName::Profits,
            IconName::Transactions,
            IconName::Logout,
            IconName::Filter,
            IconName::ChevDown,
        ] {
            assert!(svg.contains(&format!("icon icon-{}", icon.as_str())), "{page:?} missing {icon:?}");
        }
        assert!(svg.contains("NUEXA"));
        assert!(svg.contains("Sort By"));
        assert!(svg.contains("Logout"));
    }
}

#[test]
fn dark_theme_changes_background() {
    let cfg = DashboardConfig { theme: "dark".into(), ..DashboardConfig::default() };
    let svg = render_page(Page::Dashboard, &DashboardData::default(), &cfg, &Highlights::default());
    let bg = Theme::dark().background.to_hex();
    assert!(svg.contains(&format!(r#"<rect width="100%" height="100%" fill="{bg}"/>"#)));
}

#[test]
fn page_slugs_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_slug(page.slug()), Some(page));
    }
    assert_eq!(Page::from_slug("DASHBOARD"), Some(Page::Dashboard));
    assert_eq!(Page::from_slug("settings"), None);
}

#[test]
fn icon_and_escaping() {
    let svg = render_icon(IconName::Pencil, 10.0, 20.0, 24.0, Rgb::new(0, 0, 0));
    assert!(svg.starts_with(r#"<g class="icon icon-pencil" transform="translate(10,20) scale(1)""#), "{svg}");
    assert_eq!(svg.matches("<path d=").count(), 2);
    assert!(svg.contains(r##"stroke="#000000" stroke-width="2""##));

    let spark = render_icon(IconName::Spark, 0.0, 0.0, 14.0, Rgb::new(255, 255, 255));
    assert!(spark.contains("scale(0.5)"));
    assert!(spark.contains(r##"fill="#ffffff" opacity="0.9""##));

    assert_eq!(escape_xml(r#"<a & "b">'"#), "&lt;a &amp; &quot;b&quot;&gt;&#39;");
    assert_eq!(IconName::ALL.len(), 10);
}
