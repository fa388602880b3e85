//! The gpsd watch connection.
//!
//! gpsd speaks a line-oriented JSON protocol over TCP: a client sends a
//! `?WATCH` command and gpsd streams one report object per line until
//! the connection drops.

use anyhow::Context;
use log::info;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Where gpsd listens by default.
pub const DEFAULT_GPSD_ADDR: &str = "127.0.0.1:2947";

/// Watch command enabling the JSON report stream.
pub const WATCH_ENABLE: &str = "?WATCH={\"enable\":true,\"json\":true};\n";

/// Connect to gpsd and enable the JSON watch stream. The returned reader
/// yields one report per line.
pub async fn watch(addr: &str) -> anyhow::Result<BufReader<TcpStream>> {
    let mut stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("connecting to gpsd at {}", addr))?;
    stream
        .write_all(WATCH_ENABLE.as_bytes())
        .await
        .context("enabling the gpsd watch")?;
    info!("watching gpsd at {}", addr);
    Ok(BufReader::new(stream))
}
