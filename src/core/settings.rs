//! The settings model for one configuration pass.
//!
//! A [`Settings`] value is an immutable snapshot of the build context
//! (target OS, compiler, build type, architecture) supplied by the
//! invoking environment. Every other component takes it by reference;
//! nothing reads it from ambient state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target operating system.
///
/// `Emscripten` is the distinguished web target: the downstream
/// toolchain for it cannot run native-only tooling such as cppcheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Os {
    Windows,
    Linux,
    Macos,
    /// Browser/WASM target built with the Emscripten toolchain.
    Emscripten,
}

impl Os {
    /// The identifier written into the toolchain file (`CMAKE_OS`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "Windows",
            Os::Linux => "Linux",
            Os::Macos => "Macos",
            Os::Emscripten => "Emscripten",
        }
    }

    /// Whether this is the web target.
    pub fn is_web(&self) -> bool {
        matches!(self, Os::Emscripten)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Os {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Windows" | "windows" => Ok(Os::Windows),
            "Linux" | "linux" => Ok(Os::Linux),
            "Macos" | "macos" => Ok(Os::Macos),
            "Emscripten" | "emscripten" => Ok(Os::Emscripten),
            _ => Err(SettingsError::UnknownOs(s.to_string())),
        }
    }
}

/// Compiler identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compiler {
    Msvc,
    Gcc,
    Clang,
    AppleClang,
}

impl Compiler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compiler::Msvc => "msvc",
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
            Compiler::AppleClang => "apple-clang",
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compiler {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msvc" => Ok(Compiler::Msvc),
            "gcc" => Ok(Compiler::Gcc),
            "clang" => Ok(Compiler::Clang),
            "apple-clang" | "appleclang" => Ok(Compiler::AppleClang),
            _ => Err(SettingsError::UnknownCompiler(s.to_string())),
        }
    }
}

/// Build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debug" | "debug" => Ok(BuildType::Debug),
            "Release" | "release" => Ok(BuildType::Release),
            "RelWithDebInfo" => Ok(BuildType::RelWithDebInfo),
            "MinSizeRel" => Ok(BuildType::MinSizeRel),
            _ => Err(SettingsError::UnknownBuildType(s.to_string())),
        }
    }
}

/// Immutable snapshot of the build context for one configuration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target operating system.
    pub os: Os,

    /// Compiler identity, if the invoking environment supplies one.
    pub compiler: Option<Compiler>,

    /// Build configuration (Debug/Release/...).
    pub build_type: BuildType,

    /// Target architecture (free-form, e.g. "x86_64", "wasm").
    pub arch: String,
}

impl Settings {
    pub fn new(
        os: Os,
        compiler: Option<Compiler>,
        build_type: BuildType,
        arch: impl Into<String>,
    ) -> Self {
        Settings {
            os,
            compiler,
            build_type,
            arch: arch.into(),
        }
    }

    /// Build a settings model from the scalar fields supplied by the
    /// invoking environment. Unrecognized values are a construction
    /// error here, never a downstream one.
    pub fn parse(
        os: &str,
        compiler: Option<&str>,
        build_type: &str,
        arch: &str,
    ) -> Result<Self, SettingsError> {
        Ok(Settings {
            os: os.parse()?,
            compiler: compiler.map(Compiler::from_str).transpose()?,
            build_type: build_type.parse()?,
            arch: arch.to_string(),
        })
    }
}

/// Error constructing a settings model from environment-supplied strings.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("unknown os `{0}`, valid values: Windows, Linux, Macos, Emscripten")]
    UnknownOs(String),

    #[error("unknown compiler `{0}`, valid values: msvc, gcc, clang, apple-clang")]
    UnknownCompiler(String),

    #[error("unknown build type `{0}`, valid values: Debug, Release, RelWithDebInfo, MinSizeRel")]
    UnknownBuildType(String),
}

/// A settings field that participates in build-folder partitioning.
///
/// Downstream tooling uses this list to decide when regeneration
/// rather than an incremental build is required. The serialized form
/// matches [`SettingsKey::as_str`] so human and machine output name
/// each key the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsKey {
    #[serde(rename = "settings.os")]
    Os,
    #[serde(rename = "settings.build_type")]
    BuildType,
}

impl SettingsKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsKey::Os => "settings.os",
            SettingsKey::BuildType => "settings.build_type",
        }
    }
}
