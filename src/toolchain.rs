//! Toolchain file emission.
//!
//! Accumulates the cache variables the downstream native build step
//! consumes and serializes them as a CMake cache script inside the
//! generators directory. Writing that file is this component's sole
//! observable effect.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::core::policy::PolicyFlags;
use crate::core::settings::Settings;
use crate::util::config::AnalysisConfig;
use crate::util::fs::write_string;

/// Cache variable carrying the resolved target OS identifier.
pub const OS_VAR: &str = "CMAKE_OS";

/// Cache variable holding the cppcheck invocation.
pub const CPPCHECK_VAR: &str = "CMAKE_CXX_CPPCHECK";

/// Cache variable holding the clang-tidy invocation.
pub const CLANG_TIDY_VAR: &str = "CMAKE_CXX_CLANG_TIDY";

/// Name of the emitted toolchain file inside the generators directory.
pub const TOOLCHAIN_FILE_NAME: &str = "slipway_toolchain.cmake";

/// An ordered set of named cache variables.
///
/// Order is insertion order; `set` on an existing name replaces the
/// value in place so the emitted file stays diffable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheVariableSet {
    vars: Vec<(String, String)>,
}

impl CacheVariableSet {
    pub fn new() -> Self {
        CacheVariableSet::default()
    }

    /// Set a variable, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((name, value)),
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Build the cache variable set for one configuration pass.
///
/// The OS identifier is always present so downstream build logic can
/// branch on web vs native. Static-analysis invocations are only
/// emitted for native targets; the Emscripten toolchain cannot run the
/// analyzers, so on web they are omitted entirely rather than left to
/// fail. clang-tidy additionally requires its config flag (see
/// [`AnalysisConfig::clang_tidy`]) since the integration is known to
/// break builds without a compile database in place.
pub fn emit(settings: &Settings, policy: &PolicyFlags, analysis: &AnalysisConfig) -> CacheVariableSet {
    let mut vars = CacheVariableSet::new();
    vars.set(OS_VAR, settings.os.as_str());

    if !policy.is_web {
        if analysis.cppcheck() {
            vars.set(CPPCHECK_VAR, "cppcheck;--inline-suppr");
        }
        if analysis.clang_tidy() {
            vars.set(
                CLANG_TIDY_VAR,
                format!(
                    "clang-tidy;--header-filter={}",
                    analysis.clang_tidy_header_filter()
                ),
            );
        }
    }

    vars
}

/// Render the variable set as a CMake cache script.
pub fn render(vars: &CacheVariableSet) -> String {
    let mut out = String::new();
    out.push_str("# Generated by slipway. Do not edit.\n");
    for (name, value) in vars.iter() {
        // CMake string values; embedded quotes are escaped.
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        let _ = writeln!(out, "set({name} \"{escaped}\" CACHE STRING \"\" FORCE)");
    }
    out
}

/// Write the toolchain file to the location the downstream build step
/// expects, creating parent directories as needed.
pub fn write_toolchain_file(vars: &CacheVariableSet, path: &Path) -> Result<()> {
    write_string(path, &render(vars))?;
    tracing::info!("wrote toolchain file {}", path.display());
    Ok(())
}
