// File: crates/finboard-demo/src/main.rs
// Summary: Demo renders the dashboard pages to SVG/PNG, optionally with CSV chart data and a TOML config.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use finboard_core::data::{StatusFilter, TxStatus};
use finboard_core::{
    render_page, render_page_to_png, ChartDatum, DashboardConfig, DashboardData, Highlights, Page, RenderOptions,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Both,
}

/// Rows kept by the transactions table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Filter {
    All,
    Success,
    Processing,
    Failed,
}

impl From<Filter> for StatusFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::All => StatusFilter::All,
            Filter::Success => StatusFilter::Only(TxStatus::Success),
            Filter::Processing => StatusFilter::Only(TxStatus::Processing),
            Filter::Failed => StatusFilter::Only(TxStatus::Failed),
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render finboard dashboard pages", long_about = None)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Page to render (`dashboard`, `revenue`, `history`, `profits`, `transactions`) or `all`
    #[arg(short, long, default_value = "all")]
    page: String,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// `label,value` CSV replacing the breakdown and daily volume data
    #[arg(long)]
    csv: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Focus a donut slice by position
    #[arg(long)]
    highlight_slice: Option<usize>,

    /// Focus a line chart sample by index
    #[arg(long)]
    highlight_point: Option<usize>,

    /// Focus a bar by index
    #[arg(long)]
    highlight_bar: Option<usize>,

    /// Focus a KPI card by position
    #[arg(long)]
    highlight_kpi: Option<usize>,

    /// Status filter applied to the transactions table
    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    /// Log level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .init();

    let cfg = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    debug!(?cfg, "configuration");

    let mut data = DashboardData::default();
    if let Some(raw) = &args.csv {
        let (path, used_alt) = resolve_path(raw)?;
        info!(path = %path.display(), "using input file");
        if used_alt {
            info!("extension swapped between .csv/.cvs");
        }
        let rows = load_label_value_csv(&path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        if rows.is_empty() {
            anyhow::bail!("no rows loaded from {}; expected `label,value` records", path.display());
        }
        info!(rows = rows.len(), "loaded chart data");
        data.daily_volumes = rows.iter().map(|d| d.value).collect();
        data.breakdown = rows;
    }

    let pages = select_pages(&args.page)?;
    let highlights = Highlights {
        donut: args.highlight_slice,
        line: args.highlight_point,
        bar: args.highlight_bar,
        kpi: args.highlight_kpi,
        filter: args.filter.into(),
    };
    let mut opts = RenderOptions::from_config(&cfg);
    opts.highlights = highlights;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for page in pages {
        if matches!(args.format, Format::Svg | Format::Both) {
            let out = out_name(&args.out_dir, page, "svg");
            let svg = render_page(page, &data, &cfg, &highlights);
            std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
            info!(path = %out.display(), "wrote svg");
        }
        if matches!(args.format, Format::Png | Format::Both) {
            let out = out_name(&args.out_dir, page, "png");
            render_page_to_png(page, &data, &cfg, &opts, &out)
                .with_context(|| format!("rendering {}", out.display()))?;
        }
    }

    Ok(())
}

fn select_pages(raw: &str) -> Result<Vec<Page>> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Page::ALL.to_vec());
    }
    match Page::from_slug(raw) {
        Some(page) => Ok(vec![page]),
        None => anyhow::bail!("unknown page '{raw}' (expected dashboard, revenue, history, profits, transactions or all)"),
    }
}

/// Produce output file name like <out_dir>/finboard_<page>.<ext>
fn out_name(out_dir: &Path, page: Page, ext: &str) -> PathBuf {
    out_dir.join(format!("finboard_{}.{}", page.slug(), ext))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load `label,value` rows. Headers are optional; rows with an unparsable value are skipped.
fn load_label_value_csv(path: &Path) -> Result<Vec<ChartDatum>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = rec.get(0).map(str::trim).unwrap_or_default();
        let value = rec.get(1).and_then(|s| s.trim().parse::<f64>().ok());
        match value {
            Some(v) => out.push(ChartDatum::new(label, v)),
            // a header row, or junk
            None if line == 0 => debug!(?rec, "skipping header row"),
            None => warn!(line = line + 1, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
