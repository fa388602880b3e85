//! The observation filter: which satellites of a SKY report reach the log.

use crate::constellation::Constellation;
use crate::observation::Observation;
use crate::report::{Satellite, SkyReport};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Health flag value gpsd assigns to a known-healthy satellite.
pub const HEALTHY: i64 = 1;

/// Why a SKY report cannot be logged at all.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// The receiver has no time fix yet; without a report timestamp the
    /// rows cannot be assigned to an hourly partition.
    #[error("SKY report carries no timestamp")]
    MissingTimestamp,
}

/// The eligible satellites of one SKY report, stamped with its timestamp.
#[derive(Debug, Clone)]
pub struct Batch {
    pub time: DateTime<Utc>,
    pub records: Vec<Observation>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select the loggable satellites of a SKY report.
///
/// A satellite is kept when it is not SBAS, is used in the current
/// solution, and reports healthy (`health == 1` exactly; unknown health
/// does not count). A report with no timestamp is rejected whole.
pub fn filter_report(report: &SkyReport) -> Result<Batch, FilterError> {
    let time = report.time.ok_or(FilterError::MissingTimestamp)?;
    let records = report
        .satellites
        .iter()
        .filter(|satellite| is_eligible(satellite))
        .map(|satellite| Observation::from_satellite(time, satellite))
        .collect();
    Ok(Batch { time, records })
}

fn is_eligible(satellite: &Satellite) -> bool {
    satellite.constellation() != Some(Constellation::Sbas)
        && satellite.used == Some(true)
        && satellite.health == Some(HEALTHY)
}
