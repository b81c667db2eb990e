//! Platform detection and download locations.

/// Platforms perlup distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// x86_64 Windows
    Windows,
    /// Linux and other Unix
    Linux,
    /// macOS
    Darwin,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }

    /// Whether the Strawberry distribution is available here.
    ///
    /// Strawberry Perl ships Windows builds only; everywhere else the
    /// generic fallback installer takes over.
    pub fn supports_strawberry(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Get a human-readable display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "macos",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Distribution mirror hosting the portable archives.
pub const DIST_MIRROR: &str = "https://perlup-dist.s3.amazonaws.com";

/// Construct the download URL for a catalog archive.
///
/// The archive name comes straight from the catalog and is substituted
/// verbatim; catalog data guarantees it is URL-safe.
pub fn archive_url(archive: &str) -> String {
    format!("{}/strawberry-perl/{}", DIST_MIRROR, archive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform() {
        let platform = Platform::current();
        if cfg!(windows) {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_ne!(platform, Platform::Windows);
        }
    }

    #[test]
    fn test_only_windows_supports_strawberry() {
        assert!(Platform::Windows.supports_strawberry());
        assert!(!Platform::Linux.supports_strawberry());
        assert!(!Platform::Darwin.supports_strawberry());
    }

    #[test]
    fn test_archive_url() {
        let url = archive_url("strawberry-perl-5.30.0.1-64bit-portable.zip");
        assert_eq!(
            url,
            "https://perlup-dist.s3.amazonaws.com/strawberry-perl/strawberry-perl-5.30.0.1-64bit-portable.zip"
        );
    }
}
