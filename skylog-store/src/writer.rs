//! Appending live observations into hourly CSV partitions.

use crate::error::StoreError;
use crate::LOG_FILE_EXT;
use chrono::{DateTime, Utc};
use csv::Writer;
use log::{debug, warn};
use skylog_gnss::observation::{Observation, LOG_HEADER};
use skylog_utils::time::hour_floor;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Writes observation batches into the hourly partition tree under a log
/// root, rotating whenever a batch lands in a different hour than the
/// previous write. The hour a batch belongs to is decided solely by its
/// own timestamp, so batches arriving out of order reopen earlier
/// partitions and append to them.
pub struct HourlyLogWriter {
    root: PathBuf,
    open: Option<OpenPartition>,
}

struct OpenPartition {
    hour: DateTime<Utc>,
    path: PathBuf,
    writer: Writer<File>,
}

impl OpenPartition {
    /// Open the partition file for `hour` in append mode, creating parent
    /// directories as needed. The header row is written only when the file
    /// does not exist yet; a reopened partition keeps its original header.
    fn create(hour: DateTime<Utc>, path: &Path) -> Result<OpenPartition, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let is_new = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = Writer::from_writer(file);
        if is_new {
            writer.write_record(LOG_HEADER)?;
        }
        debug!("opened sky log partition {}", path.display());
        Ok(OpenPartition {
            hour,
            path: path.to_path_buf(),
            writer,
        })
    }

    fn finish(mut self) -> Result<(), StoreError> {
        self.writer.flush()?;
        debug!("released sky log partition {}", self.path.display());
        Ok(())
    }
}

impl HourlyLogWriter {
    /// Create a writer rooted at `root`. Nothing is touched on disk until
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> HourlyLogWriter {
        HourlyLogWriter {
            root: root.into(),
            open: None,
        }
    }

    /// Path of the partition holding `hour`:
    /// `{root}/YYYY-MM/YYYY-MM-DD/YYYY-MM-DDTHH.csv`
    pub fn partition_path(&self, hour: &DateTime<Utc>) -> PathBuf {
        self.root
            .join(hour.format("%Y-%m").to_string())
            .join(hour.format("%Y-%m-%d").to_string())
            .join(format!("{}.{}", hour.format("%Y-%m-%dT%H"), LOG_FILE_EXT))
    }

    /// Append a batch to the partition for its timestamp's hour, rotating
    /// first when the previous write landed in a different hour. The file
    /// is flushed before this returns, so rows survive an abrupt kill.
    pub fn write_batch(
        &mut self,
        time: &DateTime<Utc>,
        records: &[Observation],
    ) -> Result<(), StoreError> {
        let hour = hour_floor(time);
        let path = self.partition_path(&hour);
        let partition = match self.open {
            Some(ref mut open) if open.hour == hour => open,
            ref mut slot => {
                if let Some(previous) = slot.take() {
                    previous.finish()?;
                }
                slot.insert(OpenPartition::create(hour, &path)?)
            }
        };
        for record in records {
            partition.writer.write_record(record.to_row())?;
        }
        partition.writer.flush()?;
        Ok(())
    }

    /// Flush and release the open partition. Calling this twice, or before
    /// anything was written, is harmless; a later write simply opens a
    /// partition again.
    pub fn close(&mut self) -> Result<(), StoreError> {
        match self.open.take() {
            Some(partition) => partition.finish(),
            None => Ok(()),
        }
    }
}

impl Drop for HourlyLogWriter {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("sky log writer dropped with unflushed rows: {}", err);
        }
    }
}
