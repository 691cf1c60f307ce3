//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Find files matching a glob pattern relative to a base directory.
///
/// Returns matches sorted by path for deterministic processing order.
pub fn glob_files(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = base.join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let mut results = Vec::new();
    for entry in
        glob(&pattern_str).with_context(|| format!("invalid glob pattern: {}", pattern))?
    {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    results.push(path);
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// Copy a single file into a directory, overwriting any existing file
/// of the same name. Returns the destination path.
pub fn copy_into(src: &Path, dst_dir: &Path) -> Result<PathBuf> {
    let file_name = src
        .file_name()
        .with_context(|| format!("source path has no file name: {}", src.display()))?;
    let dst = dst_dir.join(file_name);
    fs::copy(src, &dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(dst)
}
