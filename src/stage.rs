//! Asset staging.
//!
//! Some dependencies ship integration sources that the application
//! compiles as its own translation units (the UI library's backend
//! bindings). Staging locates those files inside the installed package
//! and copies them into a fixed location in the project source tree
//! before the native compilation step runs.
//!
//! File contents are opaque: staging copies verbatim and never
//! interprets what it moves.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use miette::Diagnostic;
use thiserror::Error;

use crate::core::requirement::RequirementSet;
use crate::store::PackageStore;
use crate::util::fs::{copy_into, ensure_dir, glob_files};

/// One staging rule: a glob pattern inside an installed package and the
/// destination directory in the project source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Name of the declared runtime requirement that provides the files.
    pub package: String,

    /// Glob pattern relative to the package's output directory.
    pub pattern: String,

    /// Destination directory, relative to the project root.
    pub dest: PathBuf,
}

impl AssetEntry {
    pub fn new(
        package: impl Into<String>,
        pattern: impl Into<String>,
        dest: impl Into<PathBuf>,
    ) -> Self {
        AssetEntry {
            package: package.into(),
            pattern: pattern.into(),
            dest: dest.into(),
        }
    }
}

/// The staging rules for one configuration pass.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        AssetManifest { entries }
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }
}

/// Staging failure. A broken manifest entry means the build would
/// silently compile without required integration sources, so every
/// variant is fatal to the pass.
#[derive(Debug, Error, Diagnostic)]
pub enum StageError {
    #[error("asset manifest references `{package}`, which is not a declared runtime requirement")]
    #[diagnostic(code(slipway::stage::undeclared_package))]
    UndeclaredPackage { package: String },

    #[error("pattern `{pattern}` matched no files in package `{package}` at {dir}")]
    #[diagnostic(
        code(slipway::stage::no_matches),
        help("the installed package version may not ship these files; check the pinned version")
    )]
    NoMatches {
        package: String,
        pattern: String,
        dir: PathBuf,
    },
}

/// Result of a staging run.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    /// Destination paths of every staged file.
    pub staged: Vec<PathBuf>,
}

impl StageReport {
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

/// Stage every manifest entry into the project source tree.
///
/// Each entry resolves its package through the store (which must
/// already contain it; staging never installs), globs the pattern
/// inside the package directory and copies the matches, overwriting
/// files of the same name. Re-running with an unchanged package version
/// leaves the destination bit-identical.
pub fn stage_assets(
    store: &dyn PackageStore,
    requirements: &RequirementSet,
    manifest: &AssetManifest,
    project_root: &Path,
) -> Result<StageReport> {
    let mut report = StageReport::default();

    for entry in manifest.entries() {
        let req = requirements
            .runtime_by_name(&entry.package)
            .ok_or_else(|| StageError::UndeclaredPackage {
                package: entry.package.clone(),
            })?;

        let package = store.resolve(req)?;

        let matches = glob_files(&package.dir, &entry.pattern)?;
        if matches.is_empty() {
            return Err(StageError::NoMatches {
                package: entry.package.clone(),
                pattern: entry.pattern.clone(),
                dir: package.dir.clone(),
            }
            .into());
        }

        let dest_dir = project_root.join(&entry.dest);
        ensure_dir(&dest_dir)?;

        for src in &matches {
            let dst = copy_into(src, &dest_dir).with_context(|| {
                format!("failed to stage {} from `{}`", src.display(), entry.package)
            })?;
            tracing::debug!("staged {}", dst.display());
            report.staged.push(dst);
        }

        tracing::info!(
            "staged {} file(s) from {}/{} into {}",
            matches.len(),
            package.name,
            package.version,
            entry.dest.display()
        );
    }

    Ok(report)
}
