//! Fallback installer boundary for non-Windows platforms.
//!
//! The generic acquisition path lives outside this crate; provisioning only
//! needs something to hand the original specifier to. The shipped wiring
//! locates an interpreter already on the search path and reports it.

use async_trait::async_trait;
use perlup_core::{Error, Fix, Result};
use tracing::{debug, info};

/// The generic, platform-agnostic installation path used when the
/// Strawberry distribution is unavailable.
#[async_trait]
pub trait GenericInstaller: Send + Sync {
    /// Provision the requested specifier through the generic path.
    async fn install(&self, spec: &str) -> Result<()>;
}

/// Fallback that defers to the Perl already on the search path.
#[derive(Debug, Default)]
pub struct SystemPerl;

impl SystemPerl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenericInstaller for SystemPerl {
    async fn install(&self, spec: &str) -> Result<()> {
        let perl = which::which("perl").map_err(|_| Error::ToolMissing {
            tool: "perl".to_string(),
            fixes: vec![Fix::new(
                "Install Perl with your platform's package manager, or run this step on Windows",
            )],
        })?;

        debug!("probing {}", perl.display());
        let output = tokio::process::Command::new(&perl)
            .args(["-e", "print $^V"])
            .output()
            .await
            .map_err(|e| Error::io("failed to run perl", &perl, e))?;

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!(
            "requested `{}`; using the system perl {} at {}",
            spec,
            version,
            perl.display()
        );
        Ok(())
    }
}
