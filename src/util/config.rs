//! Configuration file support.
//!
//! Two configuration file locations are supported:
//! - Global: `~/.slipway/config.toml` - user-wide defaults
//! - Project: `.slipway/config.toml` - project-specific overrides
//!
//! Project config takes precedence over global config, field by field:
//! a field the project file leaves unset falls through to the global
//! value, then to the built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default header filter passed to clang-tidy when it is enabled.
pub const DEFAULT_CLANG_TIDY_HEADER_FILTER: &str = "^${sourceDir}/";

/// Slipway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package store settings
    pub store: StoreConfig,

    /// Static-analysis settings
    pub analysis: AnalysisConfig,
}

/// Package store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory of the installed-package store. When unset, the
    /// default under the slipway home directory is used.
    pub root: Option<PathBuf>,
}

/// Static-analysis settings.
///
/// Fields are optional so config layering can tell "unset" apart from
/// an explicit value; use the accessor methods for resolved values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run cppcheck during native builds. Defaults to on; it is always
    /// skipped on the web target regardless of this flag, because the
    /// Emscripten toolchain cannot run it.
    pub cppcheck: Option<bool>,

    /// Run clang-tidy during native builds.
    ///
    /// Off by default: enabling it requires a compile database in the
    /// generators dir and a clang-tidy new enough to understand the
    /// project's C++ standard, otherwise every TU fails analysis.
    pub clang_tidy: Option<bool>,

    /// Header filter passed to clang-tidy when it is enabled.
    pub clang_tidy_header_filter: Option<String>,
}

impl AnalysisConfig {
    /// Whether cppcheck runs on native builds (default: true).
    pub fn cppcheck(&self) -> bool {
        self.cppcheck.unwrap_or(true)
    }

    /// Whether clang-tidy runs on native builds (default: false).
    pub fn clang_tidy(&self) -> bool {
        self.clang_tidy.unwrap_or(false)
    }

    /// The clang-tidy header filter, falling back to the default.
    pub fn clang_tidy_header_filter(&self) -> &str {
        self.clang_tidy_header_filter
            .as_deref()
            .unwrap_or(DEFAULT_CLANG_TIDY_HEADER_FILTER)
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge a project-level config over this one, field by field.
    ///
    /// Project values win only where they are actually set; fields the
    /// project file omits keep the global (or default) value.
    pub fn merged_with(mut self, project: Config) -> Config {
        // Store settings
        if project.store.root.is_some() {
            self.store.root = project.store.root;
        }

        // Analysis settings
        if project.analysis.cppcheck.is_some() {
            self.analysis.cppcheck = project.analysis.cppcheck;
        }
        if project.analysis.clang_tidy.is_some() {
            self.analysis.clang_tidy = project.analysis.clang_tidy;
        }
        if project.analysis.clang_tidy_header_filter.is_some() {
            self.analysis.clang_tidy_header_filter = project.analysis.clang_tidy_header_filter;
        }

        self
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config: {}", path.display()))?;

        Ok(())
    }
}
