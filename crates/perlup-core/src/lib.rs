//! Core types for perlup.
//!
//! This crate provides the shared error taxonomy, environment-variable
//! constants, and exit codes used across all perlup crates.

pub mod env;
pub mod error;

pub use env::EnvVars;
pub use error::{Error, ErrorCode, Fix, Result};

/// Exit codes for the perlup CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    GeneralError = 1,
    /// Usage error (bad arguments)
    UsageError = 2,
    /// Version resolution failed
    ResolveError = 3,
    /// Download, extraction, cache, or environment failure
    ProvisionError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
