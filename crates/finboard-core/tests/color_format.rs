// File: crates/finboard-core/tests/color_format.rs
// Purpose: Seeded avatar colors, display formatting helpers and SVG number output.

use chrono::NaiveDate;
use finboard_core::color::{avatar_gradient, hsl_to_rgb, seed_hash};
use finboard_core::format::{format_count, format_date, format_money, format_percent, format_percent_digits};
use finboard_core::path::fmt_num;
use finboard_core::{avatar_hues, HuePair, PathData, Rgb};

#[test]
fn avatar_hues_are_deterministic() {
    let first = avatar_hues("Carla Johnson");
    let second = avatar_hues("Carla Johnson");
    assert_eq!(first, second);
    assert_eq!(seed_hash("Carla Johnson"), 3_949_310_864);
    assert_eq!(first, HuePair { a: 344, b: 248 });
}

#[test]
fn avatar_hue_edge_seeds() {
    assert_eq!(avatar_hues(""), HuePair { a: 0, b: 0 });
    assert_eq!(avatar_hues("a"), HuePair { a: 97, b: 319 });
    assert_eq!(avatar_hues("ab"), HuePair { a: 225, b: 135 });
    assert_eq!(avatar_gradient("Carla Johnson"), avatar_gradient("Carla Johnson"));
}

#[test]
fn avatar_gradient_stops_use_fixed_saturation_and_lightness() {
    // hues (344, 248) at 75%/65% and 75%/55%
    assert_eq!(avatar_gradient("Carla Johnson"), (Rgb::new(233, 99, 135), Rgb::new(77, 54, 226)));
}

#[test]
fn hsl_primaries_and_hex() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
    assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    assert_eq!(hsl_to_rgb(360.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    assert_eq!(Rgb::from_hex("#1a2b3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
    assert_eq!(Rgb::new(0x1a, 0x2b, 0x3c).to_hex(), "#1a2b3c");
    assert_eq!(Rgb::from_hex("1a2b3c"), None);
    assert_eq!(Rgb::from_hex("#12345"), None);
}

#[test]
fn money_and_count_formatting() {
    assert_eq!(format_money(56_420.0), "$56,420");
    assert_eq!(format_money(34_980.4), "$34,980");
    assert_eq!(format_money(-12.0), "-$12");
    assert_eq!(format_money(-0.2), "$0");
    assert_eq!(format_money(1_000_000.0), "$1,000,000");
    assert_eq!(format_money(f64::NAN), "$0");
    assert_eq!(format_count(342.0), "342");
    assert_eq!(format_count(1_204.0), "1,204");
}

#[test]
fn date_and_percent_formatting() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
    assert_eq!(format_date(d), "03/07/2024");
    assert_eq!(format_percent(4.2), "+4.2%");
    assert_eq!(format_percent(-2.3), "-2.3%");
    assert_eq!(format_percent(0.0), "0.0%");
    assert_eq!(format_percent_digits(-1.0, 0), "-1%");
    assert_eq!(format_percent_digits(6.8, 1), "+6.8%");
    assert_eq!(format_percent_digits(-0.04, 1), "0.0%");
}

#[test]
fn svg_numbers_are_compact() {
    assert_eq!(fmt_num(1.5), "1.5");
    assert_eq!(fmt_num(2.0), "2");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
    assert_eq!(fmt_num(12.34567), "12.346");
    assert_eq!(fmt_num(-3.25), "-3.25");
}

#[test]
fn path_serializes_to_svg_d() {
    let mut p = PathData::new();
    p.move_to(0.0, 0.0).line_to(10.0, 0.0).arc_to(5.0, false, true, 10.0, 10.0).close();
    assert_eq!(p.to_svg_d(), "M 0 0 L 10 0 A 5 5 0 0 1 10 10 Z");
    assert_eq!(p.commands().len(), 4);
}
