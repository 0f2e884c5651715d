//! Static plots of fields and particles
//!
//! Compiled with the `visualization` feature (it pulls `plotters`).
//!
//! # Organization
//!
//! - **config**: shared plot configuration (`PlotConfig`)
//! - **profile**: field values against position
//! - **trajectory**: particle velocity against time
//!
//! The backend is chosen from the file extension: `.svg` writes SVG,
//! anything else writes a bitmap.

pub mod config;
pub mod profile;
pub mod trajectory;

pub use config::{PlotConfig, NO_TITLE};
pub use profile::plot_field_profile;
pub use trajectory::plot_trajectory;

use plotters::prelude::*;
use std::error::Error;

/// Named polyline
pub(crate) struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Draw `series` to `output_path`, picking the backend from the extension
pub(crate) fn plot_series(
    series: &[Series],
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if series.iter().all(|s| s.points.is_empty()) {
        return Err("No data to plot".into());
    }

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, series, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, series, config)
        }
    }
}

/// Padded `(min, max)` of a set of values, never empty
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = (max - min).max(1e-10);
    (min - 0.05 * span, max + 0.05 * span)
}

fn plot_series_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[Series],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let (x_min, x_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let (y_min, y_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.3e}", y))
            .draw()?;
    }

    for (index, line) in series.iter().enumerate() {
        let color = config.series_color(index);
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
