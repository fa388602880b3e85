//! Reducing loaded history onto the angular grid.

use crate::bins::AngularBins;
use log::debug;
use ndarray::Array2;
use skylog_gnss::observation::LogRecord;
use std::collections::HashMap;

/// Quantile used to summarize each cell's signal strength. High enough to
/// track near-best signal per cell, low enough to shrug off one-sample
/// spikes.
pub const SNR_QUANTILE: f64 = 0.9;

/// Bin every record and reduce each occupied cell to its `quantile`
/// signal strength, returned as a dense (elevation bins, azimuth bins)
/// array. Cells with no samples stay 0.0, a "no data" sentinel the grid
/// does not distinguish from a true zero reading.
///
/// A record is dropped when its azimuth or elevation is missing or falls
/// outside the bin range. A record that places but has no signal reading
/// contributes nothing to its cell's sample.
pub fn snr_grid(records: &[LogRecord], bins: &AngularBins, quantile: f64) -> Array2<f64> {
    let mut cells: HashMap<(usize, usize), Vec<f64>> = HashMap::new();
    let mut outside = 0usize;
    let mut unmeasured = 0usize;

    for record in records {
        let placed = record
            .azimuth
            .zip(record.elevation)
            .and_then(|(az, el)| bins.azimuth_bin(az).zip(bins.elevation_bin(el)));
        let Some((az_bin, el_bin)) = placed else {
            outside += 1;
            continue;
        };
        match record.snr {
            Some(snr) => cells.entry((el_bin, az_bin)).or_default().push(snr),
            None => unmeasured += 1,
        }
    }

    debug!(
        "aggregating {} occupied cells ({} records outside the grid, {} without signal)",
        cells.len(),
        outside,
        unmeasured
    );

    let mut grid = Array2::zeros(bins.shape());
    for ((el_bin, az_bin), mut samples) in cells {
        if let Some(value) = percentile(&mut samples, quantile) {
            grid[[el_bin, az_bin]] = value;
        }
    }
    grid
}

/// Percentile of `samples` by linear interpolation between order
/// statistics. Sorts in place; None for an empty sample.
pub fn percentile(samples: &mut [f64], q: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(f64::total_cmp);
    let rank = q.clamp(0.0, 1.0) * (samples.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;
    Some(samples[lo] + weight * (samples[hi] - samples[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(az: f64, el: f64, snr: f64) -> LogRecord {
        LogRecord {
            constellation: "GPS".to_string(),
            elevation: Some(el),
            azimuth: Some(az),
            snr: Some(snr),
            ..LogRecord::default()
        }
    }

    #[test]
    fn test_single_record_fills_exactly_one_cell() {
        let bins = AngularBins::default();
        let grid = snr_grid(&[record(100.0, 45.0, 38.0)], &bins, SNR_QUANTILE);

        assert_eq!(grid.dim(), (90, 360));
        assert_eq!(grid[[45, 100]], 38.0);
        assert_eq!(grid.sum(), 38.0, "every other cell stays zero");
    }

    #[test]
    fn test_ten_samples_reduce_to_interpolated_percentile() {
        let bins = AngularBins::default();
        let records: Vec<LogRecord> = (1..=10)
            .map(|i| record(100.0, 45.0, (i * 10) as f64))
            .collect();
        let grid = snr_grid(&records, &bins, SNR_QUANTILE);

        // 90th percentile of [10, 20, ..., 100] interpolates to 91
        assert!((grid[[45, 100]] - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_records_are_dropped() {
        let bins = AngularBins::default();
        let records = vec![
            record(360.0, 45.0, 38.0),
            record(100.0, 90.0, 38.0),
            record(-1.0, 45.0, 38.0),
        ];
        let grid = snr_grid(&records, &bins, SNR_QUANTILE);
        assert_eq!(grid.sum(), 0.0);
    }

    #[test]
    fn test_records_without_angles_are_dropped() {
        let bins = AngularBins::default();
        let mut no_azimuth = record(100.0, 45.0, 38.0);
        no_azimuth.azimuth = None;
        let mut no_elevation = record(100.0, 45.0, 38.0);
        no_elevation.elevation = None;

        let grid = snr_grid(&[no_azimuth, no_elevation], &bins, SNR_QUANTILE);
        assert_eq!(grid.sum(), 0.0);
    }

    #[test]
    fn test_missing_signal_is_excluded_from_the_sample() {
        let bins = AngularBins::default();
        let mut silent = record(100.0, 45.0, 0.0);
        silent.snr = None;
        let records = vec![record(100.0, 45.0, 10.0), record(100.0, 45.0, 20.0), silent];
        let grid = snr_grid(&records, &bins, SNR_QUANTILE);

        // Percentile over [10, 20] only; a coerced zero would give 18.0
        assert!((grid[[45, 100]] - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_cells_aggregate_independently() {
        let bins = AngularBins::default();
        let records = vec![
            record(10.0, 10.0, 30.0),
            record(10.0, 10.0, 40.0),
            record(200.5, 80.5, 50.0),
        ];
        let grid = snr_grid(&records, &bins, SNR_QUANTILE);
        assert!((grid[[10, 10]] - 39.0).abs() < 1e-9);
        assert_eq!(grid[[80, 200]], 50.0);
    }

    #[test]
    fn test_percentile_empty_sample() {
        assert_eq!(percentile(&mut [], 0.9), None);
    }

    #[test]
    fn test_percentile_single_sample() {
        assert_eq!(percentile(&mut [42.0], 0.9), Some(42.0));
    }

    #[test]
    fn test_percentile_extremes() {
        let mut samples = [30.0, 10.0, 20.0];
        assert_eq!(percentile(&mut samples, 0.0), Some(10.0));
        assert_eq!(percentile(&mut samples, 1.0), Some(30.0));
    }

    #[test]
    fn test_percentile_interpolates_between_order_statistics() {
        let mut samples = [10.0, 20.0];
        assert_eq!(percentile(&mut samples, 0.5), Some(15.0));
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let mut samples = [100.0, 10.0, 50.0, 20.0, 90.0, 30.0, 70.0, 40.0, 80.0, 60.0];
        let value = percentile(&mut samples, 0.9).unwrap();
        assert!((value - 91.0).abs() < 1e-9);
    }
}
