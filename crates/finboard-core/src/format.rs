// File: crates/finboard-core/src/format.rs
// Summary: Display formatting for the dashboard: money, counts, MM/DD/YYYY dates and signed percentages.

use chrono::NaiveDate;

/// Whole dollars, rounded: `$56,420`, negatives as `-$12`. Non-finite amounts print as `$0`.
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(whole))
}

/// Rounded count with thousands separators: `342`, `1,204`.
pub fn format_count(n: f64) -> String {
    let n = if n.is_finite() { n } else { 0.0 };
    let whole = n.abs().round() as u64;
    let sign = if n < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(whole))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Signed percentage with one decimal: `+4.2%`, `-1.0%`, `0.0%`.
pub fn format_percent(pct: f64) -> String {
    format_percent_digits(pct, 1)
}

/// Signed percentage with `digits` decimals; zero carries no sign.
pub fn format_percent_digits(pct: f64, digits: usize) -> String {
    let pct = if pct.is_finite() { pct } else { 0.0 };
    let text = format!("{:.*}%", digits, pct.abs());
    if text.trim_start_matches(['0', '.']) == "%" {
        text
    } else if pct > 0.0 {
        format!("+{text}")
    } else {
        format!("-{text}")
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}
