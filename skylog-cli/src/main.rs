//! skylog - Command line tool for logging GNSS satellite visibility and
//! aggregating it into sky heatmap inputs.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "skylog",
    version,
    about = "GNSS satellite visibility logging and sky heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<skylog_cmd::Command>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    skylog_cmd::run(cli.command).await
}
