//! Serde model of the gpsd JSON report stream.
//!
//! gpsd emits one JSON object per line, tagged by its `class` field. Only
//! SKY reports carry satellite sightings; the rest are session bookkeeping
//! that the collector logs or skips.

use crate::constellation::Constellation;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One gpsd report line, dispatched on the `class` tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "class")]
pub enum Report {
    #[serde(rename = "SKY")]
    Sky(SkyReport),
    #[serde(rename = "VERSION")]
    Version(VersionReport),
    #[serde(rename = "DEVICES")]
    Devices(DevicesReport),
    #[serde(rename = "WATCH")]
    Watch(WatchReport),
    /// Position fixes; frequent but irrelevant to sky logging.
    #[serde(rename = "TPV")]
    Tpv,
    /// Any other class (GST, ATT, ...).
    #[serde(other)]
    Ignored,
}

impl Report {
    /// Report class name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Report::Sky(_) => "SKY",
            Report::Version(_) => "VERSION",
            Report::Devices(_) => "DEVICES",
            Report::Watch(_) => "WATCH",
            Report::Tpv => "TPV",
            Report::Ignored => "unrecognized",
        }
    }
}

/// A gpsd SKY report: the satellites currently in view.
#[derive(Debug, Deserialize)]
pub struct SkyReport {
    /// Receiver device path this report came from.
    pub device: Option<String>,
    /// Report timestamp. gpsd omits this until the receiver has a time fix.
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub satellites: Vec<Satellite>,
}

/// One satellite entry in a SKY report.
///
/// gpsd omits any field the receiver did not measure, so everything here
/// is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Satellite {
    /// Constellation id (u-blox numbering); absent on NMEA-only receivers.
    pub gnssid: Option<u8>,
    /// Satellite id within its constellation.
    pub svid: Option<i64>,
    /// Legacy NMEA pseudo-random noise id.
    #[serde(rename = "PRN")]
    pub prn: Option<i64>,
    /// Elevation above the horizon, degrees.
    pub el: Option<f64>,
    /// Azimuth from true north, degrees.
    pub az: Option<f64>,
    /// Signal-to-noise ratio, dB-Hz.
    pub ss: Option<f64>,
    /// Whether this satellite is used in the current solution.
    pub used: Option<bool>,
    /// Health flag: 0 = unknown, 1 = healthy, 2 = unhealthy.
    pub health: Option<i64>,
}

impl Satellite {
    /// Constellation this satellite belongs to, when the report carried a
    /// `gnssid`.
    pub fn constellation(&self) -> Option<Constellation> {
        self.gnssid.map(Constellation::from_gnss_id)
    }
}

/// A gpsd VERSION report, sent once when the session opens.
#[derive(Debug, Deserialize)]
pub struct VersionReport {
    pub release: Option<String>,
    pub rev: Option<String>,
}

/// A gpsd DEVICES report listing the attached receivers.
#[derive(Debug, Deserialize)]
pub struct DevicesReport {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// One attached receiver.
#[derive(Debug, Deserialize)]
pub struct Device {
    pub path: Option<String>,
    pub driver: Option<String>,
}

/// A gpsd WATCH acknowledgement echoing the watch state.
#[derive(Debug, Deserialize)]
pub struct WatchReport {
    pub enable: Option<bool>,
    pub json: Option<bool>,
}
