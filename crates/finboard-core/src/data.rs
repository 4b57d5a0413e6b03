// File: crates/finboard-core/src/data.rs
// Summary: Built-in read-only mock datasets backing the dashboard pages, plus status filtering.

use chrono::{Duration, NaiveDate};

use crate::format::{format_count, format_money};
use crate::types::ChartDatum;

/// How a KPI value is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KpiUnit {
    /// Whole dollars, `$56,420`.
    Money,
    /// Plain count, `342`.
    Count,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: f64,
    /// Change versus the previous period, in percent.
    pub delta_pct: f64,
    /// Decimal places the delta is printed with.
    pub delta_digits: usize,
    pub unit: KpiUnit,
}

impl Kpi {
    pub fn display_value(&self) -> String {
        match self.unit {
            KpiUnit::Money => format_money(self.value),
            KpiUnit::Count => format_count(self.value),
        }
    }
}

/// The four headline figures, addressable by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Kpis {
    pub total_revenue: Kpi,
    pub net_profit: Kpi,
    pub total_transactions: Kpi,
    pub active_accounts: Kpi,
}

impl Kpis {
    /// In card order.
    pub fn all(&self) -> [&Kpi; 4] {
        [&self.total_revenue, &self.net_profit, &self.total_transactions, &self.active_accounts]
    }
}

/// One person in the recent-activity feed, or the top spender.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub name: &'static str,
    /// Shortened wallet address.
    pub handle: &'static str,
    pub amount: f64,
    pub delta_pct: f64,
}

/// Recent activity sharing one calendar day.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityGroup {
    /// Display date, already formatted (`19 November 2025`).
    pub date: &'static str,
    pub items: Vec<Activity>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxStatus {
    Success,
    Failed,
    Processing,
}

impl TxStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Failed => "Failed",
            TxStatus::Processing => "Processing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Party {
    pub name: &'static str,
    pub handle: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    pub sender: Party,
    pub recipient: Party,
    pub amount: f64,
    pub card_ref: &'static str,
    pub status: TxStatus,
}

/// Which rows the transactions table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TxStatus),
}

impl StatusFilter {
    /// In the order the filter panel lists them.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TxStatus::Success),
        StatusFilter::Only(TxStatus::Processing),
        StatusFilter::Only(TxStatus::Failed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, tx: &Transaction) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => tx.status == status,
        }
    }
}

/// Per-status totals over a transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub success: usize,
    pub failed: usize,
    pub processing: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TxStatus) -> usize {
        match status {
            TxStatus::Success => self.success,
            TxStatus::Failed => self.failed,
            TxStatus::Processing => self.processing,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failed + self.processing
    }

    /// Row count a filter would leave.
    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Only(status) => self.get(status),
        }
    }
}

pub fn count_by_status(items: &[Transaction]) -> StatusCounts {
    let mut out = StatusCounts::default();
    for tx in items {
        match tx.status {
            TxStatus::Success => out.success += 1,
            TxStatus::Failed => out.failed += 1,
            TxStatus::Processing => out.processing += 1,
        }
    }
    out
}

/// Rows matching `filter`, in their original order.
pub fn filter_by_status(items: &[Transaction], filter: StatusFilter) -> Vec<&Transaction> {
    items.iter().filter(|tx| filter.matches(tx)).collect()
}

/// One line of the profit notes card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfitNote {
    pub title: &'static str,
    pub detail: &'static str,
    pub delta_pct: f64,
}

/// First day of the daily series.
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2007, 11, 9).unwrap_or_default()
}

/// Date of the `i`-th sample of a daily series, counting forward from [`base_date`].
pub fn date_label(i: usize) -> NaiveDate {
    base_date() + Duration::days(i as i64)
}

pub fn kpis() -> Kpis {
    Kpis {
        total_revenue: Kpi {
            label: "Total Revenue",
            value: 56_420.0,
            delta_pct: 6.8,
            delta_digits: 1,
            unit: KpiUnit::Money,
        },
        net_profit: Kpi { label: "Net Profit", value: 18_960.0, delta_pct: 2.5, delta_digits: 1, unit: KpiUnit::Money },
        total_transactions: Kpi {
            label: "Total Transactions",
            value: 342.0,
            delta_pct: -4.8,
            delta_digits: 1,
            unit: KpiUnit::Count,
        },
        active_accounts: Kpi {
            label: "Active Accounts",
            value: 563.0,
            delta_pct: -1.0,
            delta_digits: 0,
            unit: KpiUnit::Count,
        },
    }
}

const CARLA: Activity = Activity { name: "Carla Johnson", handle: "0x242a...a4e4", amount: 325.0, delta_pct: 2.8 };

pub fn recent_transactions() -> Vec<ActivityGroup> {
    vec![
        ActivityGroup {
            date: "19 November 2025",
            items: vec![
                CARLA,
                Activity { name: "Amigos Palomo", handle: "0x827b...d4c4", amount: 325.0, delta_pct: 2.8 },
            ],
        },
        ActivityGroup {
            date: "20 November 2025",
            items: vec![
                Activity { name: "Sebastian Tim", handle: "0x0f32...1a02", amount: 325.0, delta_pct: 2.8 },
                Activity { name: "Simara Tom", handle: "0x8841...9a21", amount: 325.0, delta_pct: 2.8 },
            ],
        },
    ]
}

pub fn top_spender() -> Activity {
    Activity { delta_pct: 6.8, ..CARLA }
}

pub fn net_profit_series() -> Vec<f64> {
    vec![12.0, 18.0, 16.0, 20.0, 14.0, 15.0, 22.0, 19.0, 24.0]
}

/// Revenue share per category (fractions of one).
pub fn donut_breakdown() -> Vec<ChartDatum> {
    vec![ChartDatum::new("Sales", 0.62), ChartDatum::new("Fees", 0.23), ChartDatum::new("Other", 0.15)]
}

/// Daily samples, oldest first; day `i` is [`date_label`]`(i)`.
pub fn daily_volumes() -> Vec<f64> {
    vec![22.0, 14.0, 28.0, 33.0, 26.0, 18.0, 36.0, 29.0, 41.0]
}

const EVERETT: Party = Party { name: "Everett Olson", handle: "0x28374967" };
const ROSALIE: Party = Party { name: "Rosalie Jacobs", handle: "0x92837465" };
const RICARDO: Party = Party { name: "Ricardo Nolan", handle: "0x85749302" };
const ESMERALDA: Party = Party { name: "Esmeralda Terry", handle: "0x27384956" };
const NAOMI: Party = Party { name: "Naomi King", handle: "0x74658392" };

// (id, sender, recipient, amount, card, status)
const HISTORY: [(&str, Party, Party, f64, &str, TxStatus); 9] = [
    ("tx_01", EVERETT, ROSALIE, 450.0, "Card 43xxxce87", TxStatus::Processing),
    ("tx_02", RICARDO, ESMERALDA, 230.0, "Card 87xxxcu90", TxStatus::Failed),
    ("tx_03", EVERETT, NAOMI, 150.0, "Card 98xxxco23", TxStatus::Success),
    ("tx_04", RICARDO, ROSALIE, 280.0, "Card 23xxxon56", TxStatus::Success),
    ("tx_05", ESMERALDA, EVERETT, 310.0, "Card 54xxxon78", TxStatus::Success),
    ("tx_06", NAOMI, RICARDO, 190.0, "Card 76xxxce43", TxStatus::Success),
    ("tx_07", ROSALIE, ESMERALDA, 420.0, "Card 34xxxon67", TxStatus::Success),
    ("tx_08", NAOMI, RICARDO, 190.0, "Card 76xxxce43", TxStatus::Success),
    ("tx_09", ROSALIE, ESMERALDA, 420.0, "Card 34xxxon67", TxStatus::Success),
];

pub fn history_transactions() -> Vec<Transaction> {
    HISTORY
        .iter()
        .map(|&(id, sender, recipient, amount, card_ref, status)| Transaction {
            id,
            sender,
            recipient,
            amount,
            card_ref,
            status,
        })
        .collect()
}

pub fn profit_notes() -> Vec<ProfitNote> {
    vec![
        ProfitNote { title: "Higher conversion", detail: "improved checkout and fewer drop-offs", delta_pct: 2.1 },
        ProfitNote { title: "Lower fees", detail: "routing optimization", delta_pct: 0.6 },
        ProfitNote { title: "Returns", detail: "slightly elevated this period", delta_pct: -0.2 },
    ]
}
