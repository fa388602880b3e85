/// Error types for the sky log store
use std::path::PathBuf;
use thiserror::Error;

/// Errors from writing or loading hourly sky logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("sky log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed
    #[error("sky log CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The discovery pattern was malformed
    #[error("bad sky log search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// History was requested but the log root holds no files
    #[error("no sky log files found under {}", .0.display())]
    NoData(PathBuf),
}
