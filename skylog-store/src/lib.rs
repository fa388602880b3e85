//! Hourly-partitioned CSV storage for satellite sky logs.
//!
//! On disk the log is a tree of plain CSV files, one per UTC hour:
//! `{root}/YYYY-MM/YYYY-MM-DD/YYYY-MM-DDTHH.csv`, each starting with the
//! `time,GNSS,SVID,PRN,el,az,ss` header. [`writer::HourlyLogWriter`]
//! appends live observations into that tree and [`loader::load_history`]
//! reads the whole tree back.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::StoreError;
pub use loader::load_history;
pub use writer::HourlyLogWriter;

/// File extension of hourly partitions.
pub const LOG_FILE_EXT: &str = "csv";
