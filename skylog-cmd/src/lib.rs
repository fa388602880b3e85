//! Command implementations for the skylog CLI.
//!
//! Two paths: `collect` tails a gpsd watch stream and appends eligible
//! satellite sightings to the hourly sky log until interrupted; `plot`
//! aggregates the accumulated log into heatmap renderer inputs once.

use clap::Subcommand;
use log::info;

pub mod collect;
pub mod gpsd;
pub mod plot;
pub mod render;

/// Default directory the hourly sky logs live under.
pub const DEFAULT_LOG_DIR: &str = "skylogs";

/// Default directory the heatmap inputs are written to.
pub const DEFAULT_PLOT_DIR: &str = "heatmaps";

#[derive(Subcommand)]
pub enum Command {
    /// Log satellite visibility from a gpsd watch stream until interrupted
    Collect {
        /// gpsd address to watch
        #[arg(long, default_value = gpsd::DEFAULT_GPSD_ADDR)]
        gpsd: String,

        /// Directory to write hourly sky logs into
        #[arg(long, default_value = DEFAULT_LOG_DIR)]
        logdir: String,
    },

    /// Aggregate the logged history into sky heatmap renderer inputs
    Plot {
        /// Directory holding the hourly sky logs
        #[arg(long, default_value = DEFAULT_LOG_DIR)]
        logdir: String,

        /// Directory to write the heatmap inputs into
        #[arg(long, default_value = DEFAULT_PLOT_DIR)]
        plotdir: String,

        /// Azimuth bin width in degrees
        #[arg(long, default_value_t = skylog_grid::bins::DEFAULT_BIN_DEG)]
        az_bin: f64,

        /// Elevation bin width in degrees
        #[arg(long, default_value_t = skylog_grid::bins::DEFAULT_BIN_DEG)]
        el_bin: f64,
    },
}

pub async fn run(command: Option<Command>) -> anyhow::Result<()> {
    match command {
        Some(Command::Collect { gpsd, logdir }) => collect::run_collect(&gpsd, &logdir).await,
        Some(Command::Plot {
            logdir,
            plotdir,
            az_bin,
            el_bin,
        }) => plot::run_plot(&logdir, &plotdir, az_bin, el_bin),
        None => {
            info!("no command given; plotting with defaults");
            plot::run_plot(
                DEFAULT_LOG_DIR,
                DEFAULT_PLOT_DIR,
                skylog_grid::bins::DEFAULT_BIN_DEG,
                skylog_grid::bins::DEFAULT_BIN_DEG,
            )
        }
    }
}
