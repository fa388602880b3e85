//! Bin edges over the sky dome.

/// Default bin width in degrees for both axes.
pub const DEFAULT_BIN_DEG: f64 = 1.0;

/// Upper azimuth edge, degrees.
pub const AZIMUTH_MAX_DEG: f64 = 360.0;

/// Upper elevation edge, degrees.
pub const ELEVATION_MAX_DEG: f64 = 90.0;

/// Bin edges over azimuth [0, 360] and elevation [0, 90].
///
/// Edges include both endpoints, so 1-degree bins give 361 azimuth edges
/// for 360 bins. A width that does not divide the span pushes the final
/// edge past it, so samples between the last whole step and the span edge
/// still land in a bin. Lookup is half-open: a value lands in bin `i` when
/// `edge[i] <= v < edge[i + 1]`, and values at or past the final edge
/// land nowhere.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularBins {
    pub azimuth_edges: Vec<f64>,
    pub elevation_edges: Vec<f64>,
}

impl Default for AngularBins {
    fn default() -> AngularBins {
        AngularBins::new(DEFAULT_BIN_DEG, DEFAULT_BIN_DEG)
    }
}

impl AngularBins {
    /// Build edges with the given bin widths in degrees. Widths must be
    /// positive; callers validate before constructing.
    pub fn new(azimuth_step: f64, elevation_step: f64) -> AngularBins {
        AngularBins {
            azimuth_edges: edges(AZIMUTH_MAX_DEG, azimuth_step),
            elevation_edges: edges(ELEVATION_MAX_DEG, elevation_step),
        }
    }

    /// Bin counts as (elevation, azimuth), the shape of the aggregated
    /// grid.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.elevation_edges.len() - 1,
            self.azimuth_edges.len() - 1,
        )
    }

    /// Azimuth bin index for a value, or None when it falls outside.
    pub fn azimuth_bin(&self, azimuth: f64) -> Option<usize> {
        bin_index(&self.azimuth_edges, azimuth)
    }

    /// Elevation bin index for a value, or None when it falls outside.
    pub fn elevation_bin(&self, elevation: f64) -> Option<usize> {
        bin_index(&self.elevation_edges, elevation)
    }
}

// Round up so the final edge lands at or past `max`.
fn edges(max: f64, step: f64) -> Vec<f64> {
    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

fn bin_index(edges: &[f64], value: f64) -> Option<usize> {
    let upper = edges.partition_point(|edge| *edge <= value);
    if upper == 0 || upper >= edges.len() {
        return None;
    }
    Some(upper - 1)
}
