use std::fmt;

/// GNSS constellations as numbered by gpsd's `gnssid` field (u-blox
/// numbering): 0 = GPS, 1 = SBAS, 2 = Galileo, 3 = BeiDou, 4 = IMES,
/// 5 = QZSS, 6 = GLONASS. Ids outside the table are carried through raw.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Constellation {
    Gps,
    Sbas,
    Galileo,
    BeiDou,
    Imes,
    Qzss,
    Glonass,
    Other(u8),
}

impl Constellation {
    /// Map a gpsd `gnssid` to its constellation.
    pub fn from_gnss_id(id: u8) -> Constellation {
        match id {
            0 => Constellation::Gps,
            1 => Constellation::Sbas,
            2 => Constellation::Galileo,
            3 => Constellation::BeiDou,
            4 => Constellation::Imes,
            5 => Constellation::Qzss,
            6 => Constellation::Glonass,
            other => Constellation::Other(other),
        }
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constellation::Gps => write!(f, "GPS"),
            Constellation::Sbas => write!(f, "SBAS"),
            Constellation::Galileo => write!(f, "Galileo"),
            Constellation::BeiDou => write!(f, "BeiDou"),
            Constellation::Imes => write!(f, "IMES"),
            Constellation::Qzss => write!(f, "QZSS"),
            Constellation::Glonass => write!(f, "GLONASS"),
            Constellation::Other(id) => write!(f, "{}", id),
        }
    }
}
