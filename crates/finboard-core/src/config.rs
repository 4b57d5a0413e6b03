// File: crates/finboard-core/src/config.rs
// Summary: Dashboard configuration (TOML via serde) with defaults and validation.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::bar::DEFAULT_BAR_RATIO;
use crate::donut::DonutOptions;
use crate::error::{Error, Result};
use crate::theme::{self, Theme};
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Theme preset name (`light`, `dark`); unknown names fall back to light.
    pub theme: String,
    pub canvas: CanvasConfig,
    pub donut: DonutConfig,
    pub line: LineConfig,
    pub bar: BarConfig,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DonutConfig {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub gap: f64,
    /// Outward offset of the hovered slice, in pixels.
    pub lift: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LineConfig {
    pub padding: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BarConfig {
    pub padding: f64,
    pub bar_ratio: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            canvas: CanvasConfig::default(),
            donut: DonutConfig::default(),
            line: LineConfig::default(),
            bar: BarConfig::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

impl Default for DonutConfig {
    fn default() -> Self {
        let d = DonutOptions::default();
        Self { outer_radius: 92.0, inner_radius: 62.0, start_angle: d.start_angle, gap: d.gap, lift: 6.0 }
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self { padding: 24.0 }
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self { padding: 24.0, bar_ratio: DEFAULT_BAR_RATIO }
    }
}

impl DonutConfig {
    pub fn options(&self) -> DonutOptions {
        DonutOptions { start_angle: self.start_angle, gap: self.gap }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document. Missing tables and keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dashboard config");
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn validate(&self) -> Result<()> {
        let d = &self.donut;
        if !(d.outer_radius > 0.0 && d.inner_radius > 0.0) {
            return Err(Error::InvalidConfig("donut radii must be positive".into()));
        }
        if d.inner_radius >= d.outer_radius {
            return Err(Error::InvalidConfig(format!(
                "donut inner_radius ({}) must be smaller than outer_radius ({})",
                d.inner_radius, d.outer_radius
            )));
        }
        if !d.start_angle.is_finite() {
            return Err(Error::InvalidConfig("donut start_angle must be finite".into()));
        }
        if !(d.gap >= 0.0 && d.gap < 360.0) {
            return Err(Error::InvalidConfig(format!("donut gap must be in [0, 360), got {}", d.gap)));
        }
        if !(d.lift >= 0.0) {
            return Err(Error::InvalidConfig(format!("donut lift must be non-negative, got {}", d.lift)));
        }
        if self.canvas.width <= 0 || self.canvas.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.line.padding >= 0.0) || !(self.bar.padding >= 0.0) {
            return Err(Error::InvalidConfig("chart padding must be non-negative".into()));
        }
        if !(self.bar.bar_ratio > 0.0 && self.bar.bar_ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "bar_ratio must be in (0, 1], got {}",
                self.bar.bar_ratio
            )));
        }
        Ok(())
    }
}
