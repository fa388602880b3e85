//! Reading the accumulated sky log history back from disk.

use crate::error::StoreError;
use crate::LOG_FILE_EXT;
use csv::ReaderBuilder;
use glob::glob;
use log::{debug, info};
use skylog_gnss::observation::LogRecord;
use std::path::{Path, PathBuf};

/// Load every sky log row under `root`, walking the partition tree
/// recursively.
///
/// Rows keep their within-file order; the order between files is
/// unspecified. Field-level damage surfaces as missing values on the
/// record rather than as errors. Returns [`StoreError::NoData`] when the
/// tree holds no log files at all.
pub fn load_history(root: &Path) -> Result<Vec<LogRecord>, StoreError> {
    let pattern = format!("{}/**/*.{}", root.display(), LOG_FILE_EXT);
    let files: Vec<PathBuf> = glob(&pattern)?.filter_map(Result::ok).collect();
    if files.is_empty() {
        return Err(StoreError::NoData(root.to_path_buf()));
    }

    let mut records = Vec::new();
    for path in &files {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let before = records.len();
        for result in reader.records() {
            let record = result?;
            records.push(LogRecord::from_string_record(&record));
        }
        debug!(
            "loaded {} rows from {}",
            records.len() - before,
            path.display()
        );
    }
    info!(
        "loaded {} sky log rows from {} files",
        records.len(),
        files.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_log(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_empty_tree_is_no_data() {
        let dir = TempDir::new().unwrap();
        let err = load_history(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::NoData(_)));
    }

    #[test]
    fn test_missing_root_is_no_data() {
        let dir = TempDir::new().unwrap();
        let err = load_history(&dir.path().join("nowhere")).unwrap_err();
        assert!(matches!(err, StoreError::NoData(_)));
    }

    #[test]
    fn test_loads_rows_across_nested_partitions() {
        let dir = TempDir::new().unwrap();
        write_log(
            dir.path(),
            "2025-06/2025-06-28/2025-06-28T17.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n\
             2025-06-28T17:52:03.000Z,GPS,5,5,45,100,38\n\
             2025-06-28T17:52:04.000Z,GLONASS,3,68,20,250,25\n",
        );
        write_log(
            dir.path(),
            "2025-06/2025-06-29/2025-06-29T03.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n\
             2025-06-29T03:00:01.000Z,Galileo,12,312,80,10,41\n",
        );

        let records = load_history(dir.path()).unwrap();
        assert_eq!(records.len(), 3);
        let galileo = records
            .iter()
            .find(|r| r.constellation == "Galileo")
            .unwrap();
        assert_eq!(galileo.snr, Some(41.0));
        assert_eq!(galileo.elevation, Some(80.0));
    }

    #[test]
    fn test_header_only_file_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        write_log(
            dir.path(),
            "2025-06/2025-06-28/2025-06-28T17.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n",
        );
        write_log(
            dir.path(),
            "2025-06/2025-06-28/2025-06-28T18.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n\
             2025-06-28T18:00:01.000Z,GPS,5,5,45,100,38\n",
        );

        let records = load_history(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_damaged_fields_become_missing_values() {
        let dir = TempDir::new().unwrap();
        write_log(
            dir.path(),
            "2025-06/2025-06-28/2025-06-28T17.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n\
             garbage,GPS,x,5,45,100,oops\n\
             2025-06-28T17:52:04.000Z,QZSS,1,193\n",
        );

        let records = load_history(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].time.is_none());
        assert!(records[0].svid.is_none());
        assert!(records[0].snr.is_none());
        assert_eq!(records[0].elevation, Some(45.0));
        // Short row: trailing fields missing
        assert_eq!(records[1].constellation, "QZSS");
        assert!(records[1].azimuth.is_none());
    }

    #[test]
    fn test_non_log_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "notes.txt", "not a log\n");
        write_log(
            dir.path(),
            "2025-06/2025-06-28/2025-06-28T17.csv",
            "time,GNSS,SVID,PRN,el,az,ss\n\
             2025-06-28T17:52:03.000Z,GPS,5,5,45,100,38\n",
        );

        let records = load_history(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
