//! The live collection path: gpsd watch stream -> filter -> hourly log.

use crate::gpsd;
use anyhow::Context;
use log::{debug, error, info, warn};
use skylog_gnss::filter::{filter_report, FilterError};
use skylog_gnss::report::{Report, SkyReport};
use skylog_store::HourlyLogWriter;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Delay before retrying after gpsd is unreachable or drops the stream.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Run collection until interrupted, then flush and release the log.
pub async fn run_collect(addr: &str, logdir: &str) -> anyhow::Result<()> {
    let mut writer = HourlyLogWriter::new(logdir);
    info!("logging satellite visibility under {}", logdir);

    let outcome = tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; closing the sky log");
            Ok(())
        }
        result = watch_loop(addr, &mut writer) => result,
    };
    writer.close().context("closing the sky log")?;
    outcome
}

/// Watch gpsd forever, reconnecting with a fixed delay whenever the
/// connection fails or closes. Runs until the task is cancelled.
async fn watch_loop(addr: &str, writer: &mut HourlyLogWriter) -> anyhow::Result<()> {
    loop {
        match gpsd::watch(addr).await {
            Ok(reader) => match consume_reports(reader, writer).await {
                Ok(()) => warn!("gpsd closed the connection"),
                Err(err) => warn!("gpsd stream failed: {:#}", err),
            },
            Err(err) => warn!("gpsd connection failed: {:#}", err),
        }
        tokio::time::sleep(RECONNECT_DELAY).await;
        info!("reconnecting to gpsd at {}", addr);
    }
}

/// Drain one gpsd session line by line. Undecodable lines are skipped;
/// the stream ending (cleanly or not) returns to the reconnect loop.
async fn consume_reports<R>(reader: R, writer: &mut HourlyLogWriter) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match serde_json::from_str::<Report>(&line) {
            Ok(report) => handle_report(&report, writer),
            Err(err) => debug!("skipping undecodable gpsd line: {}", err),
        }
    }
    Ok(())
}

fn handle_report(report: &Report, writer: &mut HourlyLogWriter) {
    match report {
        Report::Sky(sky) => handle_sky(sky, writer),
        Report::Version(version) => info!(
            "gpsd release {}",
            version.release.as_deref().unwrap_or("unknown")
        ),
        Report::Devices(devices) => {
            for device in &devices.devices {
                info!(
                    "receiver {} (driver: {})",
                    device.path.as_deref().unwrap_or("unknown"),
                    device.driver.as_deref().unwrap_or("unknown")
                );
            }
        }
        Report::Watch(watch) => debug!(
            "watch acknowledged: enable={:?} json={:?}",
            watch.enable, watch.json
        ),
        Report::Tpv | Report::Ignored => debug!("ignoring {} report", report.kind()),
    }
}

/// Filter a SKY report and append whatever survives. Reports without a
/// timestamp or without eligible satellites touch nothing; a failed write
/// is reported and the stream moves on.
fn handle_sky(report: &SkyReport, writer: &mut HourlyLogWriter) {
    let batch = match filter_report(report) {
        Ok(batch) => batch,
        Err(FilterError::MissingTimestamp) => {
            warn!("skipping SKY report without a timestamp");
            return;
        }
    };
    if batch.is_empty() {
        debug!("no loggable satellites in SKY report");
        return;
    }
    if let Err(err) = writer.write_batch(&batch.time, &batch.records) {
        error!("failed to log {} satellites: {}", batch.records.len(), err);
    }
}
