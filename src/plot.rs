//! Orbit trace rendering: reads the `index,x_km,y_km[,z_km]` CSV written by the
//! CLI and draws the projected path around an Earth disc.

use std::fs;
use std::path::Path;

use anyhow::anyhow;
use csv::ReaderBuilder;
use enginuity_core::constants::EARTH_RADIUS_KM;
use plotters::prelude::*;

/// Samples used to outline the Earth disc.
const EARTH_OUTLINE_SEGMENTS: usize = 96;
/// Fraction of the half-extent left empty around the trace.
const PADDING: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Projected `(x, y)` positions in km, in file order.
    pub points: Vec<(f64, f64)>,
    /// Whether the file carried an out-of-plane column.
    pub has_z: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    /// Skip caption, axes and labels (no font lookup).
    pub bare: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            bare: false,
        }
    }
}

pub fn read_trace<P: AsRef<Path>>(path: P) -> anyhow::Result<Trace> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let x_idx = column("x_km").ok_or_else(|| anyhow!("CSV missing 'x_km' column"))?;
    let y_idx = column("y_km").ok_or_else(|| anyhow!("CSV missing 'y_km' column"))?;
    let has_z = column("z_km").is_some();

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let r = rec?;
        let parse = |idx: usize| -> anyhow::Result<f64> {
            let raw = r.get(idx).unwrap_or("");
            raw.trim()
                .parse::<f64>()
                .map_err(|_| anyhow!("row {}: '{}' is not a number", row + 1, raw))
        };
        let x = parse(x_idx)?;
        let y = parse(y_idx)?;
        if x.is_finite() && y.is_finite() {
            points.push((x, y));
        }
    }

    if points.is_empty() {
        return Err(anyhow!("No finite trace points in the provided CSV"));
    }
    Ok(Trace { points, has_z })
}

/// Half-width of the square, origin-centred view that holds the trace and the Earth disc.
pub fn view_half_extent(points: &[(f64, f64)]) -> f64 {
    let reach = points
        .iter()
        .map(|(x, y)| x.abs().max(y.abs()))
        .fold(EARTH_RADIUS_KM, f64::max);
    reach * (1.0 + PADDING)
}

pub fn render_trace(trace: &Trace, output: &Path, options: &PlotOptions) -> anyhow::Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(output, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let half = view_half_extent(&trace.points);
    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !options.bare {
        let font_family = select_font_family();
        let caption = if trace.has_z {
            "Orbit trace (projected)"
        } else {
            "Orbit trace"
        };
        builder
            .caption(caption, FontDesc::new(font_family, 24.0, FontStyle::Bold))
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder.build_cartesian_2d(-half..half, -half..half)?;

    if !options.bare {
        let label_font = FontDesc::new(select_font_family(), 16.0, FontStyle::Normal);
        chart
            .configure_mesh()
            .x_desc("x (km)")
            .y_desc("y (km)")
            .label_style(label_font)
            .x_labels(6)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;
    }

    let earth: Vec<(f64, f64)> = (0..EARTH_OUTLINE_SEGMENTS)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / EARTH_OUTLINE_SEGMENTS as f64;
            (EARTH_RADIUS_KM * theta.cos(), EARTH_RADIUS_KM * theta.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(
        earth,
        RGBColor(70, 130, 180).mix(0.4).filled(),
    )))?;

    chart.draw_series(LineSeries::new(
        trace.points.iter().copied(),
        ShapeStyle::from(&RGBColor(210, 100, 20)).stroke_width(2),
    ))?;

    if let Some(&start) = trace.points.first() {
        chart.draw_series(std::iter::once(Circle::new(start, 4, BLACK.filled())))?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
