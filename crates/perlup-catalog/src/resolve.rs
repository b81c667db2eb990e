//! Version resolution against the catalog.

use crate::catalog::{Catalog, VersionEntry};
use perlup_core::{Error, Result};
use semver::{Version, VersionReq};
use tracing::debug;

/// Specifier that selects the catalog's first entry without range matching.
pub const LATEST: &str = "latest";

/// Select exactly one catalog entry for a version specifier.
///
/// `latest` returns the first entry as listed; the catalog's physical order
/// is trusted, not compared. Any other specifier is a semver range (`^`, `~`,
/// exact pins, `5.28.x`, comparator sets); the first entry in catalog order
/// that satisfies it wins.
pub fn resolve(spec: &str, catalog: &Catalog) -> Result<VersionEntry> {
    if catalog.is_empty() {
        return Err(Error::resolve(spec, "the version catalog is empty"));
    }

    if spec == LATEST {
        // First entry is newest by catalog convention.
        let entry = catalog.first().expect("non-empty catalog").clone();
        debug!("resolved `latest` to {}", entry.version);
        return Ok(entry);
    }

    let req = VersionReq::parse(spec)
        .map_err(|e| Error::resolve(spec, format!("invalid version specifier ({})", e)))?;

    for entry in catalog.entries() {
        let version = Version::parse(&entry.version).map_err(|e| {
            Error::catalog(format!("catalog entry `{}` is not a valid version: {}", entry.version, e))
        })?;
        if req.matches(&version) {
            debug!("resolved `{}` to {}", spec, entry.version);
            return Ok(entry.clone());
        }
    }

    Err(Error::resolve(spec, "no catalog entry satisfies it"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        Catalog::from_entries(
            pairs
                .iter()
                .map(|(v, a)| VersionEntry {
                    version: v.to_string(),
                    archive: a.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn two_entry_catalog() -> Catalog {
        catalog(&[
            ("5.30.0", "strawberry-perl-5.30.0.1-64bit-portable.zip"),
            ("5.28.2", "strawberry-perl-5.28.2.1-64bit-portable.zip"),
        ])
    }

    #[test]
    fn test_latest_picks_first_entry() {
        let entry = resolve("latest", &two_entry_catalog()).unwrap();
        assert_eq!(entry.version, "5.30.0");
    }

    #[test]
    fn test_latest_trusts_catalog_order() {
        // Out-of-order catalog: `latest` still returns the first entry,
        // not the numerically greatest.
        let shuffled = catalog(&[("5.28.2", "a.zip"), ("5.30.0", "b.zip")]);
        let entry = resolve("latest", &shuffled).unwrap();
        assert_eq!(entry.version, "5.28.2");
    }

    #[test]
    fn test_wildcard_range() {
        let entry = resolve("5.28.x", &two_entry_catalog()).unwrap();
        assert_eq!(entry.version, "5.28.2");
        assert_eq!(entry.archive, "strawberry-perl-5.28.2.1-64bit-portable.zip");
    }

    #[test]
    fn test_first_match_wins() {
        let c = catalog(&[("5.28.2", "a.zip"), ("5.28.1", "b.zip"), ("5.28.0", "c.zip")]);
        let entry = resolve("5.28.x", &c).unwrap();
        assert_eq!(entry.version, "5.28.2");
    }

    #[test]
    fn test_caret_and_tilde() {
        let c = two_entry_catalog();
        assert_eq!(resolve("^5.28", &c).unwrap().version, "5.30.0");
        assert_eq!(resolve("~5.28", &c).unwrap().version, "5.28.2");
    }

    #[test]
    fn test_comparator_range() {
        let c = two_entry_catalog();
        assert_eq!(resolve(">=5.28, <5.30", &c).unwrap().version, "5.28.2");
    }

    #[test]
    fn test_unsatisfied_specifier_fails() {
        let err = resolve("9.99.0", &two_entry_catalog()).unwrap_err();
        assert!(err.to_string().contains("9.99.0"));
    }

    #[test]
    fn test_invalid_specifier_fails() {
        let err = resolve("not-a-version", &two_entry_catalog()).unwrap_err();
        assert!(err.to_string().contains("not-a-version"));
    }

    #[test]
    fn test_empty_catalog_always_fails() {
        let empty = Catalog::default();
        assert!(resolve("latest", &empty).is_err());
        assert!(resolve("5.30.0", &empty).is_err());
    }
}
