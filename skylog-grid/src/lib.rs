//! Angular binning, aggregation, and mesh building for sky heatmaps.
//!
//! The analysis path runs loaded history through [`aggregate::snr_grid`]
//! to get a dense (elevation, azimuth) grid of percentile signal
//! strengths, then [`mesh::polar_mesh`] for the coordinate arrays a polar
//! renderer consumes alongside it.

pub mod aggregate;
pub mod bins;
pub mod mesh;
