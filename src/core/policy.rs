//! Platform policy derivation.
//!
//! Policy flags are derived deterministically and purely from the
//! settings model, once per configuration pass. No state is kept
//! between passes.

use serde::{Deserialize, Serialize};

use crate::core::settings::{Compiler, Settings};

/// How the downstream build-file generator partitions configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorMode {
    /// One build type per generated tree; output directories must be
    /// partitioned per configuration on our side.
    SingleConfig,
    /// The generator holds all build types in one tree and selects at
    /// build time; no partitioning on our side.
    MultiConfig,
}

impl GeneratorMode {
    /// Compiler-identity → generator-mode table.
    ///
    /// The target environment gives us no way to query the generator
    /// itself, so the association is maintained here. msvc is the only
    /// compiler that ships exclusively multi-configuration generators;
    /// an absent compiler (as under the Emscripten settings surface) is
    /// treated as single-config. New compiler/generator pairs are added
    /// to this table, not to call sites.
    pub fn for_compiler(compiler: Option<Compiler>) -> GeneratorMode {
        match compiler {
            Some(Compiler::Msvc) => GeneratorMode::MultiConfig,
            Some(Compiler::Gcc) | Some(Compiler::Clang) | Some(Compiler::AppleClang) | None => {
                GeneratorMode::SingleConfig
            }
        }
    }

    pub fn is_multi_config(&self) -> bool {
        matches!(self, GeneratorMode::MultiConfig)
    }
}

/// Flags gating conditional behavior in the other components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFlags {
    /// True iff the target OS is the distinguished web target.
    pub is_web: bool,

    /// Generator mode for the compiler in the settings model.
    pub generator_mode: GeneratorMode,
}

impl PolicyFlags {
    pub fn is_multi_config(&self) -> bool {
        self.generator_mode.is_multi_config()
    }
}

/// Derive the policy flags for one configuration pass.
///
/// Pure, total function of the settings model; no error conditions.
pub fn resolve_policy(settings: &Settings) -> PolicyFlags {
    PolicyFlags {
        is_web: settings.os.is_web(),
        generator_mode: GeneratorMode::for_compiler(settings.compiler),
    }
}
