//! Shell completion generation.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use perlup_core::ExitCode;

/// Generate shell completions and print to stdout.
pub fn run(shell: Shell) -> Result<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

    Ok(ExitCode::Success.into())
}
