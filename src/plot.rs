//! PNG distribution plot rendering
//!
//! Renders the token-count histogram as a bar chart with the [`plotters`]
//! bitmap backend. Uses the backend's default font rendering so plots can
//! be generated in headless environments (Docker/CI).
//!
//! Plotting is an optional capability: the binary may be built without
//! it, and the analysis degrades to text-only output. The capability is
//! detected once at startup and passed in explicitly, so nothing in here
//! consults ambient state.

use crate::analysis::histogram::Histogram;
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "plotting")]
use crate::errors::AppError;
#[cfg(feature = "plotting")]
use plotters::prelude::*;

/// Bucket count for the image histogram. Finer-grained than the console
/// histogram, which targets a 40-column terminal rather than 1200 pixels.
pub const IMAGE_BUCKET_COUNT: usize = 50;

/// Whether a plotting backend is present in this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotCapability {
    Available,
    Unavailable,
}

impl PlotCapability {
    /// Detect the capability of this build
    pub fn detect() -> Self {
        if cfg!(feature = "plotting") {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Render the token-count distribution to `<input_path>_dist.png`
///
/// Returns the written path, or `None` when the plot was skipped: the
/// capability is absent, or the token counts have no spread to bucket
/// (empty or constant sequence). Skipping is never an error.
pub fn save_distribution_plot(
    token_counts: &[u64],
    input_path: &Path,
    capability: &PlotCapability,
) -> AppResult<Option<PathBuf>> {
    if !capability.is_available() {
        return Ok(None);
    }

    let Some(histogram) = Histogram::from_values(token_counts, IMAGE_BUCKET_COUNT) else {
        info!("Skipping distribution plot: no spread in token counts");
        return Ok(None);
    };

    let output_path = PathBuf::from(format!("{}_dist.png", input_path.display()));
    render_histogram(&histogram, input_path, &output_path)?;
    Ok(Some(output_path))
}

#[cfg(feature = "plotting")]
fn render_histogram(
    histogram: &Histogram,
    input_path: &Path,
    output_path: &Path,
) -> AppResult<()> {
    let file_name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.display().to_string());
    let title = format!("Token Count Distribution: {}", file_name);

    let x_min = histogram.buckets.first().map(|b| b.low).unwrap_or(0.0);
    let x_max = histogram.buckets.last().map(|b| b.high).unwrap_or(1.0);
    let y_max = (histogram.max_count() as f64 * 1.05).max(1.0);

    // 1200x800 PNG on a white background
    let root = BitMapBackend::new(output_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| AppError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Number of Tokens per Sample")
        .y_desc("Frequency")
        .x_label_style(("sans-serif", 25))
        .y_label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| AppError::Plot(e.to_string()))?;

    let bar_colour = RGBColor(135, 206, 235); // sky blue
    chart
        .draw_series(histogram.buckets.iter().map(|bucket| {
            Rectangle::new(
                [(bucket.low, 0.0), (bucket.high, bucket.count as f64)],
                bar_colour.mix(0.7).filled(),
            )
        }))
        .map_err(|e| AppError::Plot(e.to_string()))?;

    root.present().map_err(|e| AppError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "plotting"))]
fn render_histogram(_: &Histogram, _: &Path, _: &Path) -> AppResult<()> {
    Ok(())
}
