//! Search-path rewrite for the cached installation.
//!
//! The rewrite happens once, after every fallible step has succeeded: a
//! failed provisioning run leaves the runner's `PATH` untouched.

use perlup_core::{EnvVars, Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Platform search-path separator.
pub const SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Runner environment boundary: read the search path, export variables,
/// and register path additions for later workflow steps.
pub trait RunnerEnv {
    /// The current value of the search-path variable.
    fn search_path(&self) -> String;

    /// Export an environment variable to this and later workflow steps.
    fn export_var(&mut self, name: &str, value: &str) -> Result<()>;

    /// Register a directory as a path addition for later workflow steps.
    fn add_path(&mut self, dir: &Path) -> Result<()>;
}

/// Whether a search-path entry belongs to a conflicting pre-installed
/// distribution (Strawberry itself, or its bundled MinGW toolchain).
pub fn conflicts(entry: &str) -> bool {
    let lower = entry.to_lowercase();
    lower.contains("strawberry") || lower.contains("mingw")
}

/// Split a search path into entries, dropping empty segments.
pub fn split_path(path: &str) -> Vec<String> {
    path.split(SEPARATOR)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// The three bin directories of a portable installation, in registration
/// order: compiler toolchain, Perl runtime, site-local scripts.
pub fn bin_dirs(root: &Path) -> [PathBuf; 3] {
    [
        root.join("c").join("bin"),
        root.join("perl").join("bin"),
        root.join("perl").join("site").join("bin"),
    ]
}

/// Point the runner's search path at the cached installation.
///
/// Conflicting pre-installed entries are stripped, then the portable
/// layout's bin directories are pushed to the front so the site directory
/// ends up first, ahead of the runtime and compiler directories.
pub fn rewrite<E: RunnerEnv + ?Sized>(env: &mut E, root: &Path) -> Result<()> {
    let mut entries = split_path(&env.search_path());
    entries.retain(|e| !conflicts(e));

    let dirs = bin_dirs(root);
    for dir in &dirs {
        entries.insert(0, dir.display().to_string());
    }

    let joined = entries.join(&SEPARATOR.to_string());
    debug!("rewriting search path to {}", joined);
    env.export_var("PATH", &joined)?;

    for dir in &dirs {
        env.add_path(dir)?;
    }
    Ok(())
}

/// Runner environment backed by the live process and the GitHub runner's
/// command files.
///
/// Exports append to `GITHUB_ENV` and path additions to `GITHUB_PATH`;
/// when the runner does not provide those files, the legacy workflow
/// commands are issued on stdout instead.
#[derive(Debug, Default)]
pub struct GithubEnv;

impl GithubEnv {
    pub fn new() -> Self {
        Self
    }

    fn append_line(file: &str, line: &str) -> Result<()> {
        let mut handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .map_err(|e| Error::Env {
                message: format!("failed to open {}", file),
                source: Some(e),
            })?;
        writeln!(handle, "{}", line).map_err(|e| Error::Env {
            message: format!("failed to write {}", file),
            source: Some(e),
        })
    }
}

impl RunnerEnv for GithubEnv {
    fn search_path(&self) -> String {
        std::env::var("PATH").unwrap_or_default()
    }

    fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
        std::env::set_var(name, value);
        match std::env::var(EnvVars::GITHUB_ENV) {
            Ok(file) if !file.is_empty() => {
                Self::append_line(&file, &format!("{}={}", name, value))
            }
            _ => {
                println!("::set-env name={}::{}", name, value);
                Ok(())
            }
        }
    }

    fn add_path(&mut self, dir: &Path) -> Result<()> {
        match std::env::var(EnvVars::GITHUB_PATH) {
            Ok(file) if !file.is_empty() => {
                Self::append_line(&file, &dir.display().to_string())
            }
            _ => {
                println!("::add-path::{}", dir.display());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemEnv {
        path: String,
        exported: Vec<(String, String)>,
        added: Vec<PathBuf>,
    }

    impl RunnerEnv for MemEnv {
        fn search_path(&self) -> String {
            self.path.clone()
        }

        fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
            self.exported.push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn add_path(&mut self, dir: &Path) -> Result<()> {
            self.added.push(dir.to_path_buf());
            Ok(())
        }
    }

    fn join(entries: &[&str]) -> String {
        entries.join(&SEPARATOR.to_string())
    }

    #[test]
    fn test_conflict_filter_is_case_insensitive() {
        assert!(conflicts("C:\\Strawberry\\perl\\bin"));
        assert!(conflicts("/opt/STRAWBERRY/bin"));
        assert!(conflicts("C:\\MinGW\\bin"));
        assert!(!conflicts("/usr/local/bin"));
    }

    #[test]
    fn test_conflict_filter_is_idempotent() {
        let entries = vec![
            "/usr/bin".to_string(),
            "/opt/strawberry/bin".to_string(),
            "/bin".to_string(),
        ];
        let once: Vec<_> = entries.into_iter().filter(|e| !conflicts(e)).collect();
        let twice: Vec<_> = once.clone().into_iter().filter(|e| !conflicts(e)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_path_drops_empty_segments() {
        let path = join(&["/usr/bin", "", "/bin"]);
        assert_eq!(split_path(&path), vec!["/usr/bin", "/bin"]);
    }

    #[test]
    fn test_rewrite_prepend_order() {
        let mut env = MemEnv {
            path: join(&["/usr/bin", "/bin"]),
            ..Default::default()
        };
        let root = Path::new("/cache/perl/5.30.0");
        rewrite(&mut env, root).unwrap();

        let (name, value) = &env.exported[0];
        assert_eq!(name, "PATH");
        let entries = split_path(value);
        // Site-local first, then the runtime, then the compiler toolchain.
        assert_eq!(
            &entries[..3],
            &[
                root.join("perl").join("site").join("bin").display().to_string(),
                root.join("perl").join("bin").display().to_string(),
                root.join("c").join("bin").display().to_string(),
            ]
        );
        assert_eq!(&entries[3..], &["/usr/bin", "/bin"]);
    }

    #[test]
    fn test_rewrite_strips_conflicting_entries() {
        let mut env = MemEnv {
            path: join(&["/opt/strawberry/bin", "/usr/bin", "/opt/mingw64/bin"]),
            ..Default::default()
        };
        rewrite(&mut env, Path::new("/cache/perl/5.30.0")).unwrap();

        let entries = split_path(&env.exported[0].1);
        assert!(!entries.iter().any(|e| conflicts(e)));
        assert!(entries.contains(&"/usr/bin".to_string()));
    }

    #[test]
    fn test_rewrite_exports_once_and_registers_three_additions() {
        let mut env = MemEnv {
            path: "/usr/bin".to_string(),
            ..Default::default()
        };
        let root = Path::new("/cache/perl/5.28.2");
        rewrite(&mut env, root).unwrap();

        assert_eq!(env.exported.len(), 1);
        assert_eq!(env.added, bin_dirs(root).to_vec());
    }

    #[test]
    fn test_rewrite_introduces_no_empty_segments() {
        let mut env = MemEnv {
            path: join(&["", "/usr/bin", ""]),
            ..Default::default()
        };
        rewrite(&mut env, Path::new("/cache/perl/5.30.0")).unwrap();

        let exported = &env.exported[0].1;
        assert!(split_path(exported).iter().all(|e| !e.is_empty()));
        assert!(!exported.starts_with(SEPARATOR));
        assert!(!exported.ends_with(SEPARATOR));
    }
}
