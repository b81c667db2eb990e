//! Strawberry Perl build catalog and version resolution.
//!
//! The catalog is an ordered list of known portable builds, newest first.
//! That order is load-bearing: the first entry answers `latest`, and range
//! resolution returns the first satisfying entry, so the catalog doubles as
//! the selection priority.

pub mod catalog;
pub mod resolve;

pub use catalog::{Catalog, VersionEntry};
pub use resolve::{resolve, LATEST};
