//! List command implementation.

use crate::commands::exit_code;
use crate::output::Output;
use anyhow::Result;
use console::style;
use perlup_catalog::Catalog;
use perlup_core::ExitCode;
use perlup_installer::{DiskCache, ToolCache, TOOL_NAME};

/// Print the catalog, newest first, marking cached versions.
pub fn run(installed_only: bool, output: &Output) -> Result<i32> {
    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            output.print_error(&e);
            return Ok(exit_code(&e));
        }
    };

    // A missing cache just means nothing is marked installed.
    let cache = DiskCache::new().ok();
    let is_installed = |version: &str| {
        cache
            .as_ref()
            .and_then(|c| c.find(TOOL_NAME, version))
            .is_some()
    };

    output.info("Known Perl versions (newest first):");
    let mut shown = 0;
    for (index, entry) in catalog.entries().iter().enumerate() {
        let installed = is_installed(&entry.version);
        if installed_only && !installed {
            continue;
        }
        shown += 1;

        let marker = if installed {
            format!("{} installed", style("✓").green())
        } else if index == 0 {
            "latest".to_string()
        } else {
            String::new()
        };
        output.list_item(&entry.version, &marker);
    }

    if installed_only && shown == 0 {
        output.info("No versions installed yet");
        output.info("Install one with: perlup install latest");
    }

    Ok(ExitCode::Success.into())
}
