// File: crates/demo/src/main.rs
// Summary: Demo loads OHLC bars (CSV or chunked JSON), replays a scripted wheel sequence and writes each frame to PNG.

use anyhow::{Context, Result};
use chart_core::{BarProvider, Chart, ChartConfig, CsvFileProvider, JsonFileProvider, WheelEvent};
use chart_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use tracing::info;

/// Named steps replayed against the chart; one PNG per step.
const SCRIPT: &[(&str, WheelEvent, usize)] = &[
    ("zoom_in", WheelEvent { delta_y: -100.0, zoom_modifier: true }, 6),
    ("pan_right", WheelEvent { delta_y: 100.0, zoom_modifier: false }, 25),
    ("zoom_out", WheelEvent { delta_y: 100.0, zoom_modifier: true }, 12),
    ("pan_far_right", WheelEvent { delta_y: 100.0, zoom_modifier: false }, 500),
    ("pan_back", WheelEvent { delta_y: -100.0, zoom_modifier: false }, 10),
];

struct Args {
    input: String,
    config: Option<PathBuf>,
    width: u32,
    height: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        input: "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string(),
        config: None,
        width: chart_core::types::WIDTH,
        height: chart_core::types::HEIGHT,
    };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--size" => {
                let v = it.next().context("--size needs WxH")?;
                let (w, h) = v.split_once('x').context("--size expects WxH")?;
                args.width = w.parse().with_context(|| format!("bad width '{w}'"))?;
                args.height = h.parse().with_context(|| format!("bad height '{h}'"))?;
            }
            _ => args.input = a,
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;
    let (path, used_alt) = resolve_path(&args.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let config = match &args.config {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading config '{}'", p.display()))?;
            ChartConfig::from_json_str(&text)?
        }
        None => ChartConfig::default(),
    };

    let bars = provider_for(&path)
        .fetch()
        .with_context(|| format!("failed to load bars from '{}'", path.display()))?;
    info!(bars = bars.len(), "loaded bars");
    if bars.is_empty() {
        anyhow::bail!("no bars loaded — check headers/delimiter.");
    }

    let surface = SkiaSurface::new(args.width, args.height)?;
    let mut chart = Chart::new(surface, config)?;
    chart.set_bars(bars);

    let stats = chart.draw()?;
    write_frame(&mut chart, &path, 0, "initial")?;
    info!(drawn = stats.bars_drawn, culled = stats.bars_culled, "initial frame");

    for (step, (name, event, repeat)) in SCRIPT.iter().enumerate() {
        for _ in 0..*repeat {
            chart.on_wheel(*event)?;
        }
        let vp = chart.viewport();
        info!(step = *name, bar_width = vp.bar_width(), offset_x = vp.offset_x(), "after step");
        write_frame(&mut chart, &path, step + 1, name)?;
    }
    Ok(())
}

fn provider_for(path: &Path) -> Box<dyn BarProvider> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("json") => Box::new(JsonFileProvider::new(path)),
        _ => Box::new(CsvFileProvider::new(path)),
    }
}

fn write_frame(chart: &mut Chart<SkiaSurface>, input: &Path, step: usize, name: &str) -> Result<()> {
    let out = out_name_with(input, &format!("{step:02}_{name}"));
    chart.surface_mut().write_png(&out)?;
    info!(path = %out.display(), "wrote frame");
    Ok(())
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

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("chart_{}.png", suffix));
    } else {
        out.push(format!("chart_{}_{}.png", short, suffix));
    }
    out
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
