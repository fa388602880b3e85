//! The analysis path: logged history -> percentile grid -> renderer inputs.

use crate::render;
use anyhow::Context;
use log::info;
use skylog_grid::aggregate::{snr_grid, SNR_QUANTILE};
use skylog_grid::bins::AngularBins;
use skylog_grid::mesh::polar_mesh;
use skylog_store::load_history;
use std::path::Path;

/// Aggregate everything under `logdir` into a sky heatmap grid and write
/// the renderer inputs into `plotdir`. Fails loudly on non-positive bin
/// widths and when the log holds no data at all.
pub fn run_plot(logdir: &str, plotdir: &str, az_bin: f64, el_bin: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        az_bin > 0.0 && el_bin > 0.0,
        "bin widths must be positive degrees (azimuth {}, elevation {})",
        az_bin,
        el_bin
    );
    let records = load_history(Path::new(logdir))
        .with_context(|| format!("loading sky logs from {}", logdir))?;
    info!("loaded {} observations from {}", records.len(), logdir);

    let bins = AngularBins::new(az_bin, el_bin);
    let grid = snr_grid(&records, &bins, SNR_QUANTILE);
    let mesh = polar_mesh(&bins);

    let written = render::write_heatmap_inputs(Path::new(plotdir), &grid, &mesh)?;
    for path in &written {
        info!("wrote {}", path.display());
    }
    Ok(())
}
