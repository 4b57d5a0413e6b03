// File: crates/finboard-core/src/theme.rs
// Summary: Light/Dark dashboard palettes shared by the SVG and Skia renderers.

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub surface: Rgb,
    pub sidebar: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub grid: Rgb,
    pub accent: Rgb,
    pub positive: Rgb,
    pub negative: Rgb,
    /// In-flight status, between positive and negative.
    pub warning: Rgb,
    pub bar: Rgb,
    pub bar_active: Rgb,
    /// Donut slice fills, cycled by slice index.
    pub slices: [Rgb; 5],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(244, 245, 250),
            surface: Rgb::new(255, 255, 255),
            sidebar: Rgb::new(23, 25, 35),
            border: Rgb::new(228, 230, 238),
            text: Rgb::new(28, 30, 41),
            text_muted: Rgb::new(128, 132, 150),
            grid: Rgb::new(236, 238, 244),
            accent: Rgb::new(92, 84, 230),
            positive: Rgb::new(22, 163, 108),
            negative: Rgb::new(224, 72, 72),
            warning: Rgb::new(217, 140, 20),
            bar: Rgb::new(199, 196, 246),
            bar_active: Rgb::new(92, 84, 230),
            slices: [
                Rgb::new(92, 84, 230),
                Rgb::new(56, 189, 248),
                Rgb::new(251, 146, 60),
                Rgb::new(244, 114, 182),
                Rgb::new(163, 230, 53),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 24),
            surface: Rgb::new(30, 31, 40),
            sidebar: Rgb::new(12, 12, 16),
            border: Rgb::new(46, 48, 60),
            text: Rgb::new(235, 235, 245),
            text_muted: Rgb::new(150, 152, 168),
            grid: Rgb::new(40, 41, 52),
            accent: Rgb::new(129, 120, 255),
            positive: Rgb::new(52, 211, 153),
            negative: Rgb::new(248, 113, 113),
            warning: Rgb::new(251, 191, 36),
            bar: Rgb::new(64, 60, 120),
            bar_active: Rgb::new(129, 120, 255),
            slices: [
                Rgb::new(129, 120, 255),
                Rgb::new(56, 189, 248),
                Rgb::new(251, 146, 60),
                Rgb::new(244, 114, 182),
                Rgb::new(163, 230, 53),
            ],
        }
    }

    /// Fill for the slice at `index`, wrapping around the palette.
    pub fn slice_color(&self, index: usize) -> Rgb {
        self.slices[index % self.slices.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
