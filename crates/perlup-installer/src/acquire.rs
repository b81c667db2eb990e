//! Acquisition pipeline: download, extract, store.

use crate::platform::archive_url;
use crate::tool_cache::{ToolCache, TOOL_NAME};
use perlup_core::{Error, Result};
use std::path::PathBuf;
use tracing::info;

/// Materialize a catalog entry in the tool cache.
///
/// Download failures surface as [`Error::Download`] carrying the requested
/// version and the underlying cause; nothing is retried. Extraction and
/// store failures propagate from the cache primitives.
pub async fn acquire<C: ToolCache + ?Sized>(
    entry: &perlup_catalog::VersionEntry,
    cache: &C,
) -> Result<PathBuf> {
    let url = archive_url(&entry.archive);
    info!("acquiring Perl {} from the distribution mirror", entry.version);

    let archive = cache.download(&url).await.map_err(|e| Error::Download {
        version: entry.version.clone(),
        url: url.clone(),
        source: Box::new(e),
    })?;

    let extracted = cache.extract(&archive)?;
    cache.store(&extracted, TOOL_NAME, &entry.version)
}
