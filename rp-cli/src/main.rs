//! RoadPulse CLI - list, watch and repair road-condition reports.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rp-cli",
    version,
    about = "RoadPulse road-condition toolkit"
)]
struct Cli {
    #[command(flatten)]
    connection: rp_cmd::Connection,

    #[command(subcommand)]
    command: rp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rp_cmd::run(cli.connection, cli.command).await
}
