//! Perl provisioning for CI runners.
//!
//! This crate turns a resolved catalog entry into a working installation:
//! - Platform gate with delegation to a generic fallback installer
//! - Tool-cache capability boundary (find, download, extract, store)
//! - Acquisition pipeline for cache misses
//! - PATH rewrite and export for later workflow steps

pub mod acquire;
pub mod activate;
pub mod generic;
pub mod platform;
pub mod strawberry;
pub mod tool_cache;

pub use acquire::acquire;
pub use activate::{rewrite, GithubEnv, RunnerEnv};
pub use generic::{GenericInstaller, SystemPerl};
pub use platform::{archive_url, Platform, DIST_MIRROR};
pub use strawberry::{Provision, Strawberry};
pub use tool_cache::{DiskCache, ToolCache, TOOL_NAME};
