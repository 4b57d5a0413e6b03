// File: crates/finboard-core/src/lib.rs
// Summary: Core library entry point; exports chart geometry, dashboard data and page rendering.

pub mod types;
pub mod path;
pub mod geometry;
pub mod scale;
pub mod donut;
pub mod line;
pub mod bar;
pub mod color;
pub mod theme;
pub mod icons;
pub mod format;
pub mod data;
pub mod error;
pub mod config;
pub mod interaction;
pub mod page;
pub mod svg;
pub mod raster;

pub use types::{AngleRange, ChartDatum, SeriesPoint, Viewport};
pub use path::{PathCmd, PathData};
pub use geometry::{describe_donut_slice, polar_to_cartesian, slice_geometry, Rect, SliceGeometry};
pub use donut::{layout_donut, DonutOptions, DonutSlice};
pub use line::{smooth_path, LineLayout};
pub use bar::BarLayout;
pub use color::{avatar_hues, HuePair, Rgb};
pub use theme::Theme;
pub use icons::IconName;
pub use error::{Error, Result};
pub use config::DashboardConfig;
pub use interaction::{Interactive, PointerEvent, Selection};
pub use page::{DashboardData, Page, PageLayout, Widget};
pub use svg::{render_page, Highlights};
pub use raster::{render_page_png_bytes, render_page_to_png, RenderOptions};
