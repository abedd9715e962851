//! Pond CLI - inspect and export monthly bivariate pond datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "etang-cli",
    version,
    about = "Monthly pond classification toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: etang_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    etang_cmd::run(cli.command)
}
