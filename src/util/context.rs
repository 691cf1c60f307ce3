//! Global context for slipway operations.
//!
//! Centralized access to the project root, the slipway home directory
//! and the loaded configuration. The context is built once by the CLI
//! and passed by reference into every operation; no component reads
//! ambient process state.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::util::config::Config;

/// Project directories for slipway
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "slipway", "slipway"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root (the directory being configured)
    project_root: PathBuf,

    /// Home directory for global slipway data
    home: PathBuf,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,

    /// Layered configuration (global then project)
    config: Config,
}

impl GlobalContext {
    /// Create a context rooted at the current working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_project_root(cwd)
    }

    /// Create a context rooted at an explicit project directory.
    pub fn with_project_root(project_root: PathBuf) -> Result<Self> {
        let home = if let Some(dirs) = PROJECT_DIRS.as_ref() {
            dirs.cache_dir().to_path_buf()
        } else {
            PathBuf::from(".slipway")
        };

        let global_config = Config::load_or_default(&home.join("config.toml"));
        let project_config_path = project_root.join(".slipway").join("config.toml");
        let config = if project_config_path.exists() {
            global_config.merged_with(Config::load_or_default(&project_config_path))
        } else {
            global_config
        };

        Ok(GlobalContext {
            project_root,
            home,
            verbose: false,
            color: true,
            config,
        })
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Override the store root (CLI flag beats config file).
    pub fn set_store_root(&mut self, root: PathBuf) {
        self.config.store.root = Some(root);
    }

    /// Get the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the slipway home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Root of the installed-package store.
    pub fn store_root(&self) -> PathBuf {
        self.config
            .store
            .root
            .clone()
            .unwrap_or_else(|| self.home.join("packages"))
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Get the layered configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
