//! Metric chart rendering.
//!
//! One stacked panel per metric series, values over the milestone
//! timeline, drawn to an SVG backend.

use std::path::Path;

use plotters::prelude::*;

use venture_types::error::RenderError;
use venture_types::sim::MetricBook;

fn chart_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Chart(e.to_string())
}

/// Plot every series in the book as a stacked multi-panel line chart.
pub fn render_metrics(book: &MetricBook, output_path: &Path) -> Result<(), RenderError> {
    let panel_count = book.series().len().max(1);
    let root = SVGBackend::new(output_path, (1000, 300 * panel_count as u32)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let panels = root.split_evenly((panel_count, 1));
    for (panel, series) in panels.iter().zip(book.series()) {
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        let max_value = series
            .points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max);
        let y_top = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };
        let x_max = series.points.len().saturating_sub(1).max(1) as f64;

        let mut chart = ChartBuilder::on(panel)
            .caption(format!("{} Over Time", series.name), ("sans-serif", 22))
            .margin(16)
            .x_label_area_size(36)
            .y_label_area_size(56)
            .build_cartesian_2d(-0.5_f64..x_max + 0.5, 0.0_f64..y_top)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Timeline")
            .y_desc(series.name.as_str())
            .x_labels(labels.len().max(2))
            .x_label_formatter(&|x| {
                let i = x.round();
                if i < 0.0 || (i - x).abs() > 0.25 {
                    return String::new();
                }
                labels
                    .get(i as usize)
                    .map(|l| l.to_string())
                    .unwrap_or_default()
            })
            .draw()
            .map_err(chart_err)?;

        let data: Vec<(f64, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();

        chart
            .draw_series(LineSeries::new(data.clone(), &BLUE))
            .map_err(chart_err)?;
        chart
            .draw_series(PointSeries::of_element(data, 4, &BLUE, &|c, s, st| {
                Circle::new(c, s, st.filled())
            }))
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_metrics_produces_svg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("metrics.svg");

        let mut book = MetricBook::new();
        for (day, value) in [("Day 5", 0.0), ("Day 15", 5.0), ("Day 25", 25.0)] {
            book.record("User Signups", day, value);
        }
        book.record("Conversion Rate", "Day 25", 0.2);

        render_metrics(&book, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("User Signups Over Time"));
    }

    #[test]
    fn test_render_metrics_handles_empty_series() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.svg");
        render_metrics(&MetricBook::new(), &path).unwrap();
        assert!(path.exists());
    }
}
