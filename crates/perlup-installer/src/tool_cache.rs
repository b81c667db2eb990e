//! The persistent tool cache and its acquisition primitives.
//!
//! Installations live under `<root>/<tool>/<version>` with a sibling
//! `<version>.complete` marker; a slot without its marker is treated as a
//! miss so an interrupted store never serves a half-written install.

use anyhow::anyhow;
use async_trait::async_trait;
use directories::ProjectDirs;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use perlup_core::env::temp_root;
use perlup_core::{EnvVars, Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Tool name used for cache keys.
///
/// Shared with the generic installer's cache entries: a version cached by
/// either path is visible to the other.
pub const TOOL_NAME: &str = "perl";

/// Capability boundary over the tool cache and its acquisition primitives.
#[async_trait]
pub trait ToolCache: Send + Sync {
    /// Look up a materialized installation. `None` means cache miss.
    fn find(&self, tool: &str, version: &str) -> Option<PathBuf>;

    /// Download a URL into the staging area, returning the file path.
    async fn download(&self, url: &str) -> Result<PathBuf>;

    /// Unpack a downloaded archive into a fresh staging directory.
    fn extract(&self, archive: &Path) -> Result<PathBuf>;

    /// Move an extracted tree into its cache slot and return the stable path.
    fn store(&self, dir: &Path, tool: &str, version: &str) -> Result<PathBuf>;
}

/// Disk-backed tool cache.
#[derive(Debug, Clone)]
pub struct DiskCache {
    root: PathBuf,
    staging: PathBuf,
}

impl DiskCache {
    /// Open the runner's tool cache.
    ///
    /// The root comes from `RUNNER_TOOL_CACHE` when the runner provides it,
    /// otherwise the platform cache directory.
    pub fn new() -> Result<Self> {
        let root = match std::env::var(EnvVars::RUNNER_TOOL_CACHE) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => {
                let dirs = ProjectDirs::from("io", "perlup", "perlup").ok_or_else(|| {
                    Error::env("could not determine a home directory for the tool cache")
                })?;
                dirs.cache_dir().join("tools")
            }
        };
        Ok(Self {
            root,
            staging: temp_root().to_path_buf(),
        })
    }

    /// Open a cache rooted at explicit directories.
    pub fn at(root: impl Into<PathBuf>, staging: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            staging: staging.into(),
        }
    }

    /// The cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(version)
    }

    fn marker(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(format!("{}.complete", version))
    }
}

#[async_trait]
impl ToolCache for DiskCache {
    fn find(&self, tool: &str, version: &str) -> Option<PathBuf> {
        let slot = self.slot(tool, version);
        if slot.is_dir() && self.marker(tool, version).exists() {
            debug!("cache hit for {} {} at {}", tool, version, slot.display());
            Some(slot)
        } else {
            None
        }
    }

    async fn download(&self, url: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.staging).map_err(|e| {
            Error::io("failed to create staging directory", &self.staging, e)
        })?;

        let name = url.rsplit('/').next().unwrap_or("download.zip");
        let dest = self.staging.join(name);
        if dest.exists() {
            debug!("archive already downloaded: {}", dest.display());
            return Ok(dest);
        }

        debug!("downloading {}", url);
        let response = reqwest::get(url)
            .await
            .map_err(|e| Error::Other(anyhow!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::Other(anyhow!(
                "mirror returned HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let total = response.content_length().unwrap_or(0);
        let bar = if total > 0 {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/dim}] {bytes}/{total_bytes}")
                    .expect("valid template")
                    .progress_chars("━━─"),
            );
            bar.set_message(name.to_string());
            Some(bar)
        } else {
            None
        };

        // Stream to a partial file, then rename into place.
        let partial = dest.with_extension("part");
        let mut file = File::create(&partial)
            .map_err(|e| Error::io("failed to create download file", &partial, e))?;

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| Error::Other(anyhow!("download interrupted: {}", e)))?;
            file.write_all(&chunk)
                .map_err(|e| Error::io("failed to write download data", &partial, e))?;
            written += chunk.len() as u64;
            if let Some(ref bar) = bar {
                bar.set_position(written);
            }
        }
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        fs::rename(&partial, &dest)
            .map_err(|e| Error::io("failed to finalize download", &dest, e))?;

        debug!("downloaded {} bytes to {}", written, dest.display());
        Ok(dest)
    }

    fn extract(&self, archive: &Path) -> Result<PathBuf> {
        let stem = archive
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "archive".to_string());
        let dest = self.staging.join(format!("{}.extracted", stem));
        if dest.exists() {
            fs::remove_dir_all(&dest)
                .map_err(|e| Error::io("failed to clear extraction directory", &dest, e))?;
        }
        fs::create_dir_all(&dest)
            .map_err(|e| Error::io("failed to create extraction directory", &dest, e))?;

        debug!("extracting {} to {}", archive.display(), dest.display());
        let file = File::open(archive)
            .map_err(|e| Error::io("failed to open archive", archive, e))?;
        let mut zip = zip::ZipArchive::new(file).map_err(|e| Error::Io {
            message: format!("failed to read archive: {}", e),
            path: Some(archive.to_path_buf()),
            source: std::io::Error::other(e),
        })?;
        zip.extract(&dest).map_err(|e| Error::Io {
            message: format!("failed to extract archive: {}", e),
            path: Some(archive.to_path_buf()),
            source: std::io::Error::other(e),
        })?;

        Ok(dest)
    }

    fn store(&self, dir: &Path, tool: &str, version: &str) -> Result<PathBuf> {
        let slot = self.slot(tool, version);
        if let Some(parent) = slot.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io("failed to create cache directory", parent, e))?;
        }
        if slot.exists() {
            fs::remove_dir_all(&slot)
                .map_err(|e| Error::io("failed to clear cache slot", &slot, e))?;
        }

        // Staging and cache may sit on different filesystems.
        if fs::rename(dir, &slot).is_err() {
            copy_dir_all(dir, &slot)?;
        }

        let marker = self.marker(tool, version);
        fs::write(&marker, b"")
            .map_err(|e| Error::io("failed to write completion marker", &marker, e))?;

        debug!("stored {} {} at {}", tool, version, slot.display());
        Ok(slot)
    }
}

fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| Error::io("failed to create directory", dst, e))?;
    let entries =
        fs::read_dir(src).map_err(|e| Error::io("failed to read directory", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("failed to read directory entry", src, e))?;
        let target = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io("failed to stat directory entry", entry.path(), e))?;
        if file_type.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| Error::io("failed to copy file", entry.path(), e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_misses_on_empty_cache() {
        let temp = tempdir().unwrap();
        let cache = DiskCache::at(temp.path().join("cache"), temp.path().join("staging"));
        assert!(cache.find(TOOL_NAME, "5.30.0").is_none());
    }

    #[test]
    fn test_find_requires_completion_marker() {
        let temp = tempdir().unwrap();
        let cache = DiskCache::at(temp.path().join("cache"), temp.path().join("staging"));
        let slot = temp.path().join("cache").join("perl").join("5.30.0");
        fs::create_dir_all(&slot).unwrap();

        // Slot exists but the store never finished.
        assert!(cache.find(TOOL_NAME, "5.30.0").is_none());
    }

    #[test]
    fn test_store_then_find_round_trip() {
        let temp = tempdir().unwrap();
        let cache = DiskCache::at(temp.path().join("cache"), temp.path().join("staging"));

        let extracted = temp.path().join("extracted");
        fs::create_dir_all(extracted.join("perl").join("bin")).unwrap();
        fs::write(extracted.join("perl").join("bin").join("perl.exe"), b"").unwrap();

        let slot = cache.store(&extracted, TOOL_NAME, "5.30.0").unwrap();
        assert_eq!(cache.find(TOOL_NAME, "5.30.0"), Some(slot.clone()));
        assert!(slot.join("perl").join("bin").join("perl.exe").exists());
    }

    #[test]
    fn test_store_replaces_existing_slot() {
        let temp = tempdir().unwrap();
        let cache = DiskCache::at(temp.path().join("cache"), temp.path().join("staging"));

        let first = temp.path().join("first");
        fs::create_dir_all(&first).unwrap();
        fs::write(first.join("old"), b"").unwrap();
        cache.store(&first, TOOL_NAME, "5.30.0").unwrap();

        let second = temp.path().join("second");
        fs::create_dir_all(&second).unwrap();
        fs::write(second.join("new"), b"").unwrap();
        let slot = cache.store(&second, TOOL_NAME, "5.30.0").unwrap();

        assert!(!slot.join("old").exists());
        assert!(slot.join("new").exists());
    }
}
