//! CDV CLI - Command line tool for charting daily climate-station records.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cdv-cli",
    version,
    about = "Daily climate-station data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cdv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cdv_cmd::run(cli.command)
}
