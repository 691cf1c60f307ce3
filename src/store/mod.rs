//! The package store collaborator.
//!
//! The store maps a declared requirement to the directory of an already
//! installed package. Packages are installed out of band (by CI or by a
//! developer running the package tooling); slipway only ever reads the
//! store and fails hard when a requirement cannot be satisfied.
//!
//! On-disk layout of the directory-backed store:
//!
//! ```text
//! <root>/<name>/<version>/   # one installed package output directory
//! ```

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use semver::Version;
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::requirement::{Requirement, RequirementSet};

/// A requirement resolved to an installed package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: Version,
    /// The package's output directory inside the store.
    pub dir: PathBuf,
}

/// Resolution failure: a declared requirement the store cannot satisfy.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("package `{name}` not found in store {store}")]
    #[diagnostic(
        code(slipway::store::not_found),
        help("install the package into the store, or point --store at a populated one")
    )]
    PackageNotFound { name: String, store: PathBuf },

    #[error("no installed version of `{name}` satisfies `{req}` (installed: {})", .available.join(", "))]
    #[diagnostic(
        code(slipway::store::unresolved_constraint),
        help("install a matching version or update the pinned constraint")
    )]
    NoMatchingVersion {
        name: String,
        req: String,
        available: Vec<String>,
    },

    #[error("failed to read store {store}")]
    #[diagnostic(code(slipway::store::io))]
    Io {
        store: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only access to installed packages.
///
/// Kept behind a trait so the configure pass can be exercised against
/// an in-memory store in tests.
pub trait PackageStore {
    /// Resolve a requirement to an installed package directory.
    ///
    /// Never installs anything; an unsatisfied constraint is surfaced
    /// as an error, not worked around.
    fn resolve(&self, req: &Requirement) -> Result<InstalledPackage, StoreError>;
}

/// Directory-backed package store.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every installed (name, version) pair in the store.
    pub fn list(&self) -> Vec<(String, Version)> {
        let mut packages = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
        {
            let version = entry.file_name().to_string_lossy().to_string();
            let name = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string());
            if let (Some(name), Ok(version)) = (name, Version::parse(&version)) {
                packages.push((name, version));
            }
        }
        packages.sort();
        packages
    }

    /// Installed versions of one package, best (highest) first.
    fn versions_of(&self, name: &str) -> Result<Vec<(Version, PathBuf)>, StoreError> {
        let pkg_dir = self.root.join(name);
        if !pkg_dir.is_dir() {
            return Err(StoreError::PackageNotFound {
                name: name.to_string(),
                store: self.root.clone(),
            });
        }

        let mut versions = Vec::new();
        let entries = std::fs::read_dir(&pkg_dir).map_err(|source| StoreError::Io {
            store: pkg_dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                store: pkg_dir.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            match Version::parse(&entry.file_name().to_string_lossy()) {
                Ok(version) => versions.push((version, entry.path())),
                Err(_) => {
                    tracing::debug!(
                        "ignoring non-semver entry in store: {}",
                        entry.path().display()
                    );
                }
            }
        }

        versions.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(versions)
    }
}

impl PackageStore for DirStore {
    fn resolve(&self, req: &Requirement) -> Result<InstalledPackage, StoreError> {
        let versions = self.versions_of(req.name())?;

        match versions
            .iter()
            .find(|(version, _)| req.matches_version(version))
        {
            Some((version, dir)) => Ok(InstalledPackage {
                name: req.name().to_string(),
                version: version.clone(),
                dir: dir.clone(),
            }),
            None => Err(StoreError::NoMatchingVersion {
                name: req.name().to_string(),
                req: req.version_req().to_string(),
                available: versions.iter().map(|(v, _)| v.to_string()).collect(),
            }),
        }
    }
}

/// Verify that every declared requirement resolves against the store.
///
/// Returns the resolved packages (runtime first, then test-only) so the
/// caller can report them; the first unsatisfied requirement aborts.
pub fn verify_requirements(
    store: &dyn PackageStore,
    set: &RequirementSet,
) -> Result<Vec<InstalledPackage>, StoreError> {
    set.iter().map(|req| store.resolve(req)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(packages: &[(&str, &str)]) -> (TempDir, DirStore) {
        let tmp = TempDir::new().unwrap();
        for (name, version) in packages {
            std::fs::create_dir_all(tmp.path().join(name).join(version)).unwrap();
        }
        let store = DirStore::new(tmp.path());
        (tmp, store)
    }

    #[test]
    fn test_resolve_exact_pin() {
        let (_tmp, store) = store_with(&[("sdl", "3.2.20"), ("sdl", "3.2.18")]);

        let pkg = store.resolve(&Requirement::pinned("sdl", "3.2.20")).unwrap();
        assert_eq!(pkg.version, Version::parse("3.2.20").unwrap());
        assert!(pkg.dir.ends_with("sdl/3.2.20"));
    }

    #[test]
    fn test_resolve_prefers_highest_matching() {
        let (_tmp, store) = store_with(&[("spdlog", "1.15.1"), ("spdlog", "1.15.3")]);

        let req = Requirement::new("spdlog", semver::VersionReq::parse("^1.15").unwrap());
        let pkg = store.resolve(&req).unwrap();
        assert_eq!(pkg.version, Version::parse("1.15.3").unwrap());
    }

    #[test]
    fn test_missing_package_is_an_error() {
        let (_tmp, store) = store_with(&[("sdl", "3.2.20")]);

        let err = store.resolve(&Requirement::pinned("imgui", "1.92.0")).unwrap_err();
        assert!(matches!(err, StoreError::PackageNotFound { .. }));
    }

    #[test]
    fn test_unsatisfied_constraint_reports_available() {
        let (_tmp, store) = store_with(&[("catch2", "3.5.0")]);

        let err = store.resolve(&Requirement::pinned("catch2", "3.7.1")).unwrap_err();
        match err {
            StoreError::NoMatchingVersion { available, .. } => {
                assert_eq!(available, vec!["3.5.0".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_semver_entries_are_ignored() {
        let (tmp, store) = store_with(&[("glm", "1.0.1")]);
        std::fs::create_dir_all(tmp.path().join("glm").join("latest")).unwrap();

        let pkg = store.resolve(&Requirement::pinned("glm", "1.0.1")).unwrap();
        assert_eq!(pkg.version, Version::parse("1.0.1").unwrap());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_verify_requirements_covers_both_partitions() {
        let (_tmp, store) = store_with(&[("sdl", "3.2.20"), ("catch2", "3.7.1")]);

        let mut set = RequirementSet::new();
        set.require(Requirement::pinned("sdl", "3.2.20"));
        set.test_require(Requirement::pinned("catch2", "3.7.1"));

        let resolved = verify_requirements(&store, &set).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "sdl");
        assert_eq!(resolved[1].name, "catch2");
    }

    #[test]
    fn test_verify_fails_fast_on_missing() {
        let (_tmp, store) = store_with(&[("sdl", "3.2.20")]);

        let mut set = RequirementSet::new();
        set.require(Requirement::pinned("sdl", "3.2.20"));
        set.require(Requirement::pinned("spdlog", "1.15.3"));

        assert!(verify_requirements(&store, &set).is_err());
    }
}
