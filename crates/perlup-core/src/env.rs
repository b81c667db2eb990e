//! Environment variable constants for perlup.
//!
//! This module defines the environment variables perlup recognizes and the
//! runner temp-directory resolution shared by the installer.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable names used by perlup.
pub struct EnvVars;

impl EnvVars {
    /// Enable verbose output.
    pub const PERLUP_VERBOSE: &'static str = "PERLUP_VERBOSE";

    /// Suppress output.
    pub const PERLUP_QUIET: &'static str = "PERLUP_QUIET";

    /// Disable colored output.
    pub const PERLUP_NO_COLOR: &'static str = "PERLUP_NO_COLOR";

    /// Enable JSON log output.
    pub const PERLUP_LOG_JSON: &'static str = "PERLUP_LOG_JSON";

    /// Runner-provided staging area for downloads and extraction.
    pub const RUNNER_TEMPDIRECTORY: &'static str = "RUNNER_TEMPDIRECTORY";

    /// Runner-provided root of the persistent tool cache.
    pub const RUNNER_TOOL_CACHE: &'static str = "RUNNER_TOOL_CACHE";

    /// File that collects environment exports for later workflow steps.
    pub const GITHUB_ENV: &'static str = "GITHUB_ENV";

    /// File that collects PATH additions for later workflow steps.
    pub const GITHUB_PATH: &'static str = "GITHUB_PATH";

    /// Standard NO_COLOR environment variable.
    pub const NO_COLOR: &'static str = "NO_COLOR";

    /// CI environment indicator.
    pub const CI: &'static str = "CI";

    /// Windows home directory.
    pub const USERPROFILE: &'static str = "USERPROFILE";
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var(EnvVars::CI).is_ok()
}

/// Check if colors should be disabled based on environment.
pub fn no_color() -> bool {
    std::env::var(EnvVars::NO_COLOR).is_ok() || std::env::var(EnvVars::PERLUP_NO_COLOR).is_ok()
}

static TEMP_ROOT: LazyLock<PathBuf> = LazyLock::new(resolve_temp_root);

/// The staging area for downloads and extraction.
///
/// Resolved once per process: `RUNNER_TEMPDIRECTORY` when the runner provides
/// it, otherwise the conventional `actions/temp` location for the platform.
pub fn temp_root() -> &'static Path {
    &TEMP_ROOT
}

fn resolve_temp_root() -> PathBuf {
    if let Ok(dir) = std::env::var(EnvVars::RUNNER_TEMPDIRECTORY) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    default_temp_root()
}

fn default_temp_root() -> PathBuf {
    let base = if cfg!(windows) {
        std::env::var(EnvVars::USERPROFILE).unwrap_or_else(|_| "C:\\".to_string())
    } else if cfg!(target_os = "macos") {
        "/Users".to_string()
    } else {
        "/home".to_string()
    };

    PathBuf::from(base).join("actions").join("temp")
}
