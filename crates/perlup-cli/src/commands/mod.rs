//! Command implementations.

mod completions;
mod install;
mod list;

use crate::cli::{Cli, Commands};
use crate::output::Output;
use anyhow::Result;
use clap::CommandFactory;
use perlup_core::{env, Error, ErrorCode, ExitCode};

/// Run the CLI command.
pub async fn run(cli: Cli) -> Result<i32> {
    if cli.global.no_color || env::no_color() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output = Output::new(cli.global.quiet);

    match cli.command {
        Some(Commands::Install { version, force }) => {
            install::run(&version, force, &output).await
        }
        Some(Commands::List { installed }) => list::run(installed, &output),
        Some(Commands::Completions { shell }) => completions::run(shell),
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::Success.into())
        }
    }
}

/// Map a provisioning error to the process exit code.
pub fn exit_code(error: &Error) -> i32 {
    match error.code() {
        ErrorCode::ResolveError => ExitCode::ResolveError.into(),
        _ => ExitCode::ProvisionError.into(),
    }
}
