//! Polar coordinate meshes for the sky heatmap renderer.

use crate::bins::{AngularBins, ELEVATION_MAX_DEG};
use ndarray::Array2;

/// Coordinate meshes over the bin edges: `theta` is the azimuth edge in
/// radians and `radius` the zenith distance in degrees (0 straight up,
/// 90 at the horizon). Both are shaped (elevation edges, azimuth edges)
/// so a renderer can zip them directly against the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarMesh {
    pub theta: Array2<f64>,
    pub radius: Array2<f64>,
}

/// Build the renderer meshes for the given bin edges.
pub fn polar_mesh(bins: &AngularBins) -> PolarMesh {
    let shape = (bins.elevation_edges.len(), bins.azimuth_edges.len());
    let theta = Array2::from_shape_fn(shape, |(_, j)| bins.azimuth_edges[j].to_radians());
    let radius =
        Array2::from_shape_fn(shape, |(i, _)| ELEVATION_MAX_DEG - bins.elevation_edges[i]);
    PolarMesh { theta, radius }
}
