use std::collections::BTreeMap;
use std::ops::Range;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the spread of repeated estimates as a PNG bar chart.
/// An empty slice writes nothing.
pub fn write_estimate_histogram_png(
    output_path: &str,
    estimates: &[f64],
    exact: Option<f64>,
) -> Result<(), HistogramError> {
    if estimates.is_empty() {
        return Ok(());
    }

    let min_value = estimates.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = estimates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let bin_width = bin_width(min_value, max_value, estimates.len());
    let counts = bucket_counts(estimates, bin_width);
    let max_count = *counts.values().max().unwrap_or(&1);

    let min_bucket = counts.keys().next().copied().unwrap_or(0) - 1;
    let max_bucket = counts.keys().next_back().copied().unwrap_or(0) + 2;
    let x_range = (min_bucket as f64 * bin_width)..(max_bucket as f64 * bin_width);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Repeated Estimates", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range.clone(), 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Estimated probability")
        .y_desc("Repeats")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.4}"))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().map(|(bucket, count)| {
            let (left, right) = bucket_edges(*bucket, bin_width);
            Rectangle::new([(left, 0), (right, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    if let Some(x) = exact.and_then(|exact| exact_marker(exact, &x_range)) {
        chart
            .draw_series(LineSeries::new(
                vec![(x, 0), (x, max_count + 1)],
                RED.stroke_width(2),
            ))
            .map_err(|e| HistogramError::Render(e.to_string()))?;
    }

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

/// Square-root rule, with a floor so identical estimates still get a bar.
fn bin_width(min_value: f64, max_value: f64, samples: usize) -> f64 {
    let range = max_value - min_value;
    let bins = (samples as f64).sqrt().max(1.0);
    let width = range / bins;
    if width > f64::EPSILON { width } else { 1e-4 }
}

fn bucket_edges(bucket: i64, bin_width: f64) -> (f64, f64) {
    (bucket as f64 * bin_width, (bucket + 1) as f64 * bin_width)
}

/// x position of the exact-value line; `None` when it falls off the axis.
fn exact_marker(exact: f64, x_range: &Range<f64>) -> Option<f64> {
    x_range.contains(&exact).then_some(exact)
}

fn bucket_counts(values: &[f64], bin_width: f64) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        let bucket = (*value / bin_width).floor() as i64;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }
    counts
}
