//! Structured logging setup.

use perlup_core::EnvVars;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Filtering honors `RUST_LOG`; without it, `--verbose` raises the default
/// level from warnings to debug. `PERLUP_LOG_JSON` switches to JSON lines
/// for log collection.
pub fn init(verbose: bool) {
    let default = if verbose {
        "perlup_cli=debug,perlup_core=debug,perlup_catalog=debug,perlup_installer=debug"
    } else {
        "perlup_cli=warn,perlup_core=warn,perlup_catalog=warn,perlup_installer=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = tracing_subscriber::registry().with(filter);

    if std::env::var(EnvVars::PERLUP_LOG_JSON).is_ok() {
        let json_layer = fmt::layer().json().with_target(true);
        subscriber.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer().with_target(false).without_time();
        subscriber.with(fmt_layer).init();
    }
}
