// File: crates/finboard-core/src/icons.rs
// Summary: Icon set as an enum dispatching to fixed vector glyphs drawn in the current color.

/// How one path of a glyph is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ink {
    Fill,
    /// Stroke of the given width, in view-box units.
    Stroke(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPart {
    pub d: &'static str,
    pub ink: Ink,
    pub opacity: f32,
}

const fn stroke(d: &'static str, width: f32, opacity: f32) -> IconPart {
    IconPart { d, ink: Ink::Stroke(width), opacity }
}

const fn fill(d: &'static str, opacity: f32) -> IconPart {
    IconPart { d, ink: Ink::Fill, opacity }
}

/// Fixed vector description of an icon: its square view box and painted paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconGlyph {
    pub view_box: (u8, u8, u8, u8),
    pub parts: &'static [IconPart],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Brand mark.
    Spark,
    Grid,
    Revenue,
    History,
    Profits,
    Transactions,
    Logout,
    Filter,
    ChevDown,
    Pencil,
}

const VIEW_BOX: (u8, u8, u8, u8) = (0, 0, 24, 24);

const SPARK: &[IconPart] = &[
    // 24x24 frame at (2,2) with 7px corners
    stroke("M9 2h10a7 7 0 0 1 7 7v10a7 7 0 0 1-7 7H9a7 7 0 0 1-7-7V9a7 7 0 0 1 7-7z", 1.0, 0.75),
    fill("M14 6l1.4 4.2L20 12l-4.6 1.8L14 18l-1.4-4.2L8 12l4.6-1.8L14 6z", 0.9),
];
const GRID: &[IconPart] = &[fill("M4 4h7v7H4V4zm9 0h7v7h-7V4zM4 13h7v7H4v-7zm9 0h7v7h-7v-7z", 0.9)];
const REVENUE: &[IconPart] = &[stroke("M6 20V9m6 11V4m6 16v-7", 2.0, 0.95), stroke("M4 20h16", 2.0, 0.45)];
const HISTORY: &[IconPart] = &[
    stroke("M7 7h10M7 12h10M7 17h6", 2.0, 0.95),
    stroke(
        "M4 6.5c0-1.38 1.12-2.5 2.5-2.5h11C19.88 4 21 5.12 21 6.5v11c0 1.38-1.12 2.5-2.5 2.5h-11C5.12 20 4 18.88 4 17.5v-11z",
        1.0,
        0.35,
    ),
];
const PROFITS: &[IconPart] = &[stroke("M5 16l5-5 4 4 5-7", 2.0, 0.95), stroke("M19 8h-4", 2.0, 0.55)];
const TRANSACTIONS: &[IconPart] =
    &[stroke("M7 7h11M7 7l2-2M7 7l2 2", 2.0, 0.95), stroke("M17 17H6m11 0-2-2m2 2-2 2", 2.0, 0.75)];
const LOGOUT: &[IconPart] = &[
    stroke("M10 7V6a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2h-6a2 2 0 0 1-2-2v-1", 2.0, 0.6),
    stroke("M3 12h10m0 0-3-3m3 3-3 3", 2.0, 0.95),
];
const FILTER: &[IconPart] = &[stroke("M4 6h16l-6 7v5l-4 2v-7L4 6z", 2.0, 0.9)];
const CHEV_DOWN: &[IconPart] = &[stroke("M7 10l5 5 5-5", 2.0, 0.9)];
const PENCIL: &[IconPart] =
    &[stroke("M12 20h9", 2.0, 0.55), stroke("M16.5 3.5a2.1 2.1 0 0 1 3 3L8 18l-4 1 1-4L16.5 3.5z", 2.0, 0.95)];

impl IconName {
    pub const ALL: [IconName; 10] = [
        IconName::Spark,
        IconName::Grid,
        IconName::Revenue,
        IconName::History,
        IconName::Profits,
        IconName::Transactions,
        IconName::Logout,
        IconName::Filter,
        IconName::ChevDown,
        IconName::Pencil,
    ];

    pub fn glyph(self) -> IconGlyph {
        let parts = match self {
            IconName::Spark => return IconGlyph { view_box: (0, 0, 28, 28), parts: SPARK },
            IconName::Grid => GRID,
            IconName::Revenue => REVENUE,
            IconName::History => HISTORY,
            IconName::Profits => PROFITS,
            IconName::Transactions => TRANSACTIONS,
            IconName::Logout => LOGOUT,
            IconName::Filter => FILTER,
            IconName::ChevDown => CHEV_DOWN,
            IconName::Pencil => PENCIL,
        };
        IconGlyph { view_box: VIEW_BOX, parts }
    }

    /// Kebab-case identifier, used as a CSS class and for lookups.
    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Spark => "spark",
            IconName::Grid => "grid",
            IconName::Revenue => "revenue",
            IconName::History => "history",
            IconName::Profits => "profits",
            IconName::Transactions => "transactions",
            IconName::Logout => "logout",
            IconName::Filter => "filter",
            IconName::ChevDown => "chev-down",
            IconName::Pencil => "pencil",
        }
    }
}
