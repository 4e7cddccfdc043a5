use std::path::Path;

use anyhow::Context as _;
use plotters::prelude::*;

use crate::foundation::error::VmafgraphResult;

/// Chart geometry and labelling options.
#[derive(Clone, Debug)]
pub struct ChartOptions {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Y-axis description, normally the charted metric's name.
    pub y_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            y_label: "VMAF Score".to_string(),
        }
    }
}

/// Render a series as a filled line chart in SVG form.
///
/// The series is drawn verbatim in the order given: an area fill under the
/// curve with the line on top, frame number on the x axis, and a mesh grid.
/// An empty series produces a chart with axes only rather than an error.
#[tracing::instrument(skip(series))]
pub fn render_series_svg(
    series: &[(u32, f64)],
    out: &Path,
    opts: &ChartOptions,
) -> VmafgraphResult<()> {
    let fill = RGBColor(135, 206, 235); // sky blue
    let line = RGBColor(106, 90, 205); // slate blue

    let x_max = series.iter().map(|&(x, _)| x).max().unwrap_or(1).max(1);
    let y_max = series
        .iter()
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let root = SVGBackend::new(out, (opts.width, opts.height)).into_drawing_area();
    root.fill(&WHITE).context("fill chart background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption("VMAF Score Trend", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0..x_max, 0.0..y_max * 1.05)
        .context("lay out chart axes")?;

    chart
        .configure_mesh()
        .x_desc("Frame Number")
        .y_desc(opts.y_label.as_str())
        .draw()
        .context("draw chart mesh")?;

    chart
        .draw_series(AreaSeries::new(series.iter().copied(), 0.0, fill.mix(0.4)))
        .context("draw filled area")?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &line))
        .context("draw series line")?
        .label(format!("{} per Frame", opts.y_label))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], line));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()
        .context("draw legend")?;

    root.present().context("write chart SVG")?;
    Ok(())
}
