//! perlup - Perl runtime provisioning for CI runners.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod styles;
mod telemetry;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init(cli.global.verbose);

    let exit_code = commands::run(cli).await?;

    std::process::exit(exit_code);
}
