//! Error types for perlup.

use std::path::PathBuf;

/// Result type alias using perlup Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Error codes for categorizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catalog resource missing or corrupt
    CatalogError,
    /// No catalog entry satisfies the specifier
    ResolveError,
    /// Download from the distribution mirror failed
    DownloadError,
    /// Interpreter not found for the fallback path
    ToolMissing,
    /// I/O error
    IoError,
    /// Runner environment export failed
    EnvError,
}

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Description of what this fix does
    pub description: String,
    /// Command to run, if applicable
    pub command: Option<String>,
}

impl Fix {
    /// Create a fix with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    /// Create a fix with a command.
    pub fn with_command(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

/// Structured error type for perlup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog error: {message}")]
    Catalog {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("no version matching `{spec}`: {detail}")]
    Resolve {
        spec: String,
        detail: String,
        fixes: Vec<Fix>,
    },

    #[error("failed to download Perl {version}")]
    Download {
        version: String,
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{tool} not found")]
    ToolMissing { tool: String, fixes: Vec<Fix> },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("environment error: {message}")]
    Env {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Catalog { .. } => ErrorCode::CatalogError,
            Error::Resolve { .. } => ErrorCode::ResolveError,
            Error::Download { .. } => ErrorCode::DownloadError,
            Error::ToolMissing { .. } => ErrorCode::ToolMissing,
            Error::Io { .. } => ErrorCode::IoError,
            Error::Env { .. } => ErrorCode::EnvError,
            Error::Other(_) => ErrorCode::IoError,
        }
    }

    /// Get suggested fixes for this error.
    pub fn fixes(&self) -> &[Fix] {
        match self {
            Error::Resolve { fixes, .. } => fixes,
            Error::ToolMissing { fixes, .. } => fixes,
            _ => &[],
        }
    }

    /// Create a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Error::Catalog {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a catalog error with a path.
    pub fn catalog_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Catalog {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a resolution error for a specifier.
    pub fn resolve(spec: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Resolve {
            spec: spec.into(),
            detail: detail.into(),
            fixes: vec![Fix::with_command(
                "List the versions the catalog knows about",
                "perlup list",
            )],
        }
    }

    /// Create an I/O error with a message and path.
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            message: message.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Create an environment error.
    pub fn env(message: impl Into<String>) -> Self {
        Error::Env {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::catalog("bad").code(), ErrorCode::CatalogError);
        assert_eq!(Error::resolve("5.99", "no match").code(), ErrorCode::ResolveError);
        assert_eq!(Error::env("no GITHUB_ENV").code(), ErrorCode::EnvError);
    }

    #[test]
    fn test_resolve_error_names_spec() {
        let err = Error::resolve("9.99.0", "no catalog entry satisfies it");
        assert!(err.to_string().contains("9.99.0"));
        assert!(!err.fixes().is_empty());
    }

    #[test]
    fn test_fix_with_command() {
        let fix = Fix::with_command("List versions", "perlup list");
        assert_eq!(fix.command.as_deref(), Some("perlup list"));
    }
}
