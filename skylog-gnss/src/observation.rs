//! Sky log rows: the on-disk schema, the writing form, and the lenient
//! read-back form.
//!
//! Every hourly log file starts with the header row
//! `time,GNSS,SVID,PRN,el,az,ss`. Timestamps are RFC 3339 UTC with
//! millisecond precision; missing fields are empty columns.

use crate::constellation::Constellation;
use crate::report::Satellite;
use chrono::{DateTime, Utc};
use csv::StringRecord;
use skylog_utils::time::{format_timestamp, parse_timestamp};

/// Column header of every hourly sky log file.
pub const LOG_HEADER: [&str; 7] = ["time", "GNSS", "SVID", "PRN", "el", "az", "ss"];

/// A single satellite sighting bound for the sky log.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub time: DateTime<Utc>,
    pub constellation: Option<Constellation>,
    pub svid: Option<i64>,
    pub prn: Option<i64>,
    pub elevation: Option<f64>,
    pub azimuth: Option<f64>,
    pub snr: Option<f64>,
}

impl Observation {
    /// Build an observation from a SKY satellite entry, stamped with the
    /// report timestamp.
    pub fn from_satellite(time: DateTime<Utc>, satellite: &Satellite) -> Observation {
        Observation {
            time,
            constellation: satellite.constellation(),
            svid: satellite.svid,
            prn: satellite.prn,
            elevation: satellite.el,
            azimuth: satellite.az,
            snr: satellite.ss,
        }
    }

    /// Render the observation as a log row. Missing fields become empty
    /// columns.
    pub fn to_row(&self) -> [String; 7] {
        [
            format_timestamp(&self.time),
            self.constellation
                .map_or(String::new(), |c| c.to_string()),
            self.svid.map_or(String::new(), |v| v.to_string()),
            self.prn.map_or(String::new(), |v| v.to_string()),
            self.elevation.map_or(String::new(), |v| v.to_string()),
            self.azimuth.map_or(String::new(), |v| v.to_string()),
            self.snr.map_or(String::new(), |v| v.to_string()),
        ]
    }
}

/// A sky log row read back from disk.
///
/// Historical files can carry gaps or hand-edited rows, so every field is
/// optional and rows are taken as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecord {
    pub time: Option<DateTime<Utc>>,
    pub constellation: String,
    pub svid: Option<i64>,
    pub prn: Option<i64>,
    pub elevation: Option<f64>,
    pub azimuth: Option<f64>,
    pub snr: Option<f64>,
}

impl LogRecord {
    /// Parse a CSV record leniently: malformed or absent fields become
    /// missing values, never errors.
    pub fn from_string_record(record: &StringRecord) -> LogRecord {
        LogRecord {
            time: record.get(0).and_then(|s| parse_timestamp(s.trim()).ok()),
            constellation: record.get(1).unwrap_or("").trim().to_string(),
            svid: record.get(2).and_then(|s| s.trim().parse().ok()),
            prn: record.get(3).and_then(|s| s.trim().parse().ok()),
            elevation: record.get(4).and_then(|s| s.trim().parse().ok()),
            azimuth: record.get(5).and_then(|s| s.trim().parse().ok()),
            snr: record.get(6).and_then(|s| s.trim().parse().ok()),
        }
    }
}
