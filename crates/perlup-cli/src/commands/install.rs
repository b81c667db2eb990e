//! Install command implementation.

use crate::commands::exit_code;
use crate::output::Output;
use anyhow::Result;
use perlup_core::ExitCode;
use perlup_installer::{DiskCache, GithubEnv, Provision, Strawberry, SystemPerl};

/// Resolve, cache, and activate the requested Perl version.
pub async fn run(version: &str, force: bool, output: &Output) -> Result<i32> {
    output.status("Provisioning", &format!("Perl {}", version));

    let cache = match DiskCache::new() {
        Ok(cache) => cache,
        Err(e) => {
            output.print_error(&e);
            return Ok(exit_code(&e));
        }
    };

    let mut provisioner = Strawberry::new(cache, GithubEnv::new(), SystemPerl::new());
    match provisioner.provision(version, force).await {
        Ok(Provision::Installed {
            version,
            path,
            was_cached,
        }) => {
            let origin = if was_cached { "from cache" } else { "downloaded" };
            output.status("Done", &format!("Perl {} ({})", version, origin));
            output.list_item("path", &path.display().to_string());
            Ok(ExitCode::Success.into())
        }
        Ok(Provision::Delegated) => {
            output.status("Done", "delegated to the default distribution");
            Ok(ExitCode::Success.into())
        }
        Err(e) => {
            output.print_error(&e);
            Ok(exit_code(&e))
        }
    }
}
