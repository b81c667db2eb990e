//! CLI argument parsing.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use perlup_core::EnvVars;

use crate::styles::STYLES;

/// perlup - Perl runtime provisioning for CI runners
#[derive(Parser, Debug)]
#[command(name = "perlup")]
#[command(author, version, about = "Provision Perl runtimes on CI runners")]
#[command(propagate_version = true)]
#[command(styles = STYLES)]
#[command(after_help = "Use `perlup help <command>` for more information about a command.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true, env = EnvVars::PERLUP_VERBOSE)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, env = EnvVars::PERLUP_QUIET)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = EnvVars::PERLUP_NO_COLOR)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a version specifier, cache the build, and rewire PATH
    #[command(disable_version_flag = true)]
    Install {
        /// Version specifier: `latest`, a pin like `5.28.2`, or a range
        /// like `5.28.x`
        #[arg(default_value = "latest")]
        version: String,

        /// Re-acquire the build even when it is already cached
        #[arg(long)]
        force: bool,
    },

    /// Show the versions the bundled catalog knows about
    List {
        /// Only show versions already present in the tool cache
        #[arg(long)]
        installed: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
