//! Provisioning orchestration for the Strawberry distribution.

use crate::activate::{rewrite, RunnerEnv};
use crate::generic::GenericInstaller;
use crate::platform::Platform;
use crate::tool_cache::{ToolCache, TOOL_NAME};
use perlup_catalog::{resolve, Catalog};
use perlup_core::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a provisioning run.
#[derive(Debug)]
pub enum Provision {
    /// A Strawberry build is cached and on the search path.
    Installed {
        version: String,
        path: PathBuf,
        was_cached: bool,
    },
    /// A non-Windows platform delegated to the generic installer.
    Delegated,
}

/// Provisions a requested Perl version on the current runner.
pub struct Strawberry<C, E, F> {
    platform: Platform,
    cache: C,
    env: E,
    fallback: F,
}

impl<C, E, F> Strawberry<C, E, F>
where
    C: ToolCache,
    E: RunnerEnv,
    F: GenericInstaller,
{
    /// Create a provisioner for the current platform.
    pub fn new(cache: C, env: E, fallback: F) -> Self {
        Self {
            platform: Platform::current(),
            cache,
            env,
            fallback,
        }
    }

    /// Override the detected platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Resolve `spec`, ensure the build is cached, and rewire the search
    /// path. `force` re-acquires even on a cache hit.
    ///
    /// On platforms without a Strawberry distribution the original
    /// specifier is handed to the fallback installer and this returns
    /// [`Provision::Delegated`] without error; a fallback failure is the
    /// fallback's own contract and is only logged here.
    pub async fn provision(&mut self, spec: &str, force: bool) -> Result<Provision> {
        if !self.platform.supports_strawberry() {
            info!("the Strawberry distribution is not available on {}", self.platform);
            info!("falling back to the default distribution");
            if let Err(e) = self.fallback.install(spec).await {
                warn!("default distribution installer failed: {}", e);
            }
            return Ok(Provision::Delegated);
        }

        let catalog = Catalog::bundled()?;
        let selected = resolve(spec, &catalog)?;

        let cached = if force {
            None
        } else {
            self.cache.find(TOOL_NAME, &selected.version)
        };
        let was_cached = cached.is_some();

        let path = match cached {
            Some(path) => path,
            None => crate::acquire::acquire(&selected, &self.cache).await?,
        };
        debug!("Perl tool is cached under {}", path.display());

        // The environment is only touched once every fallible step is done.
        rewrite(&mut self.env, &path)?;

        Ok(Provision::Installed {
            version: selected.version,
            path,
            was_cached,
        })
    }
}
