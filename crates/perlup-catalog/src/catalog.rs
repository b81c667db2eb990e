//! The bundled catalog of known Strawberry Perl portable builds.

use perlup_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

// 5.18.3, 5.14.1 and 5.14.0 portable builds were never published upstream,
// and 64-bit portable archives stop at 5.14.x entirely.
static BUNDLED: &str = include_str!("../versions/strawberry.json");

/// One installable build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Perl version string (e.g., "5.30.0").
    pub version: String,
    /// Archive file name on the distribution mirror.
    pub archive: String,
}

/// Ordered list of known builds, newest first.
///
/// Entries keep their listed order; the first entry is the implicit `latest`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<VersionEntry>,
}

impl Catalog {
    /// Load the catalog bundled with this build of perlup.
    ///
    /// Idempotent: repeated calls parse the same embedded resource.
    pub fn bundled() -> Result<Self> {
        let catalog = Self::from_json(BUNDLED)?;
        debug!("loaded bundled catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of `{version, archive}` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<VersionEntry> = serde_json::from_str(json).map_err(|e| Error::Catalog {
            message: format!("failed to parse version catalog: {}", e),
            path: None,
            source: Some(Box::new(e)),
        })?;
        Self::from_entries(entries)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io("failed to read version catalog", path, e))?;
        Self::from_json(&content).map_err(|e| match e {
            Error::Catalog { message, source, .. } => Error::Catalog {
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Build a catalog from entries, enforcing the catalog invariants.
    pub fn from_entries(entries: Vec<VersionEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if semver::Version::parse(&entry.version).is_err() {
                return Err(Error::catalog(format!(
                    "catalog entry `{}` is not a valid version",
                    entry.version
                )));
            }
            if !seen.insert(entry.archive.as_str()) {
                return Err(Error::catalog(format!(
                    "duplicate archive `{}` in catalog",
                    entry.archive
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The entries in listed order.
    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    /// The first (newest) entry, if any.
    pub fn first(&self) -> Option<&VersionEntry> {
        self.entries.first()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
