//! Writing the renderer hand-off: the aggregated grid and its coordinate
//! meshes as plain CSV matrices.
//!
//! Rendering itself happens outside this tool; anything that can read a
//! CSV matrix (a notebook, a plotting script) can turn the three files
//! into a polar sky heatmap.

use anyhow::Context;
use chrono::Utc;
use ndarray::Array2;
use skylog_grid::mesh::PolarMesh;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format baked into output file names.
const STAMP_FORMAT: &str = "%Y-%m-%dT%H%MZ";

/// Write the grid and both meshes into `plot_dir` as
/// `gnss_sky_heatmap.{stamp}.{grid,theta,radius}.csv`, returning the
/// paths written.
pub fn write_heatmap_inputs(
    plot_dir: &Path,
    grid: &Array2<f64>,
    mesh: &PolarMesh,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(plot_dir)
        .with_context(|| format!("creating {}", plot_dir.display()))?;
    let stamp = Utc::now().format(STAMP_FORMAT).to_string();

    let mut written = Vec::new();
    for (name, matrix) in [
        ("grid", grid),
        ("theta", &mesh.theta),
        ("radius", &mesh.radius),
    ] {
        let path = plot_dir.join(format!("gnss_sky_heatmap.{}.{}.csv", stamp, name));
        write_matrix(&path, matrix)
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn write_matrix(path: &Path, matrix: &Array2<f64>) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in matrix.rows() {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylog_grid::bins::AngularBins;
    use skylog_grid::mesh::polar_mesh;
    use std::f64::consts::PI;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_matrix_per_array() {
        let dir = TempDir::new().unwrap();
        let bins = AngularBins::new(10.0, 10.0);
        let mut grid = Array2::zeros(bins.shape());
        grid[[3, 18]] = 42.5;
        let mesh = polar_mesh(&bins);

        let written = write_heatmap_inputs(dir.path(), &grid, &mesh).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }

        let grid_csv = fs::read_to_string(&written[0]).unwrap();
        let rows: Vec<&str> = grid_csv.lines().collect();
        assert_eq!(rows.len(), 9, "one row per elevation bin");
        assert_eq!(rows[0].split(',').count(), 36, "one column per azimuth bin");
        assert_eq!(rows[3].split(',').nth(18).unwrap(), "42.5");

        // Meshes are written over the edges, one row per elevation edge
        let theta_csv = fs::read_to_string(&written[1]).unwrap();
        let theta_rows: Vec<&str> = theta_csv.lines().collect();
        assert_eq!(theta_rows.len(), 10);
        let pi_cell: f64 = theta_rows[0].split(',').nth(18).unwrap().parse().unwrap();
        assert!((pi_cell - PI).abs() < 1e-12);
    }
}
