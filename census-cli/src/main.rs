//! Census CLI - render the state population chart outside the browser.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "census-cli",
    version,
    about = "State population chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: census_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    census_cmd::run(cli.command).await
}
