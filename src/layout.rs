//! Build-output directory layout.
//!
//! Computes where generated build metadata and build artifacts live for
//! one settings combination. The two paths are the contract surface for
//! external tooling (CI scripts, IDE integrations) that needs to locate
//! outputs without re-deriving the policy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::policy::PolicyFlags;
use crate::core::settings::{Settings, SettingsKey};

/// Resolved output layout for one configuration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    /// Directory for generated build metadata (toolchain file etc.),
    /// relative to the project root.
    pub generators_dir: PathBuf,

    /// Directory for build artifacts, relative to the project root.
    pub build_dir: PathBuf,

    /// Which settings fields distinguish physically separate build
    /// folders on disk.
    pub build_folder_vars: Vec<SettingsKey>,
}

/// Compute the output layout for the given policy and settings.
///
/// Multi-configuration generators partition build types internally, so
/// one nominal `build/` tree is shared across configurations. A
/// single-configuration generator can only hold one configuration per
/// tree; reusing a path across configurations would corrupt a previous
/// build's artifacts, so the path is partitioned by os and build type.
pub fn resolve_layout(policy: &PolicyFlags, settings: &Settings) -> LayoutDescriptor {
    let build_folder_vars = vec![SettingsKey::Os, SettingsKey::BuildType];

    if policy.is_multi_config() {
        LayoutDescriptor {
            generators_dir: PathBuf::from("build").join("generators"),
            build_dir: PathBuf::from("build"),
            build_folder_vars,
        }
    } else {
        let build_dir = PathBuf::from("build")
            .join(settings.os.as_str())
            .join(settings.build_type.as_str());
        LayoutDescriptor {
            generators_dir: build_dir.join("generators"),
            build_dir,
            build_folder_vars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::resolve_policy;
    use crate::core::settings::{BuildType, Compiler, Os};

    fn layout_for(os: Os, compiler: Option<Compiler>, build_type: BuildType) -> LayoutDescriptor {
        let settings = Settings::new(os, compiler, build_type, "x86_64");
        resolve_layout(&resolve_policy(&settings), &settings)
    }

    #[test]
    fn test_single_config_partitions_by_os_and_build_type() {
        let layout = layout_for(Os::Emscripten, None, BuildType::Release);
        assert_eq!(layout.build_dir, PathBuf::from("build/Emscripten/Release"));
        assert_eq!(
            layout.generators_dir,
            PathBuf::from("build/Emscripten/Release/generators")
        );
    }

    #[test]
    fn test_multi_config_reuses_one_tree() {
        let layout = layout_for(Os::Windows, Some(Compiler::Msvc), BuildType::Debug);
        assert_eq!(layout.build_dir, PathBuf::from("build"));
        assert_eq!(layout.generators_dir, PathBuf::from("build/generators"));
    }

    #[test]
    fn test_multi_config_is_independent_of_build_type() {
        let debug = layout_for(Os::Windows, Some(Compiler::Msvc), BuildType::Debug);
        let release = layout_for(Os::Windows, Some(Compiler::Msvc), BuildType::Release);
        assert_eq!(debug.build_dir, release.build_dir);
        assert_eq!(debug.generators_dir, release.generators_dir);
    }

    #[test]
    fn test_single_config_build_dirs_never_collide() {
        let all_os = [Os::Windows, Os::Linux, Os::Macos, Os::Emscripten];
        let all_types = [
            BuildType::Debug,
            BuildType::Release,
            BuildType::RelWithDebInfo,
            BuildType::MinSizeRel,
        ];

        let mut seen = std::collections::HashSet::new();
        for os in all_os {
            for build_type in all_types {
                let layout = layout_for(os, Some(Compiler::Gcc), build_type);
                assert!(
                    seen.insert(layout.build_dir.clone()),
                    "collision at {}",
                    layout.build_dir.display()
                );
            }
        }
    }

    #[test]
    fn test_build_folder_vars_name_partitioning_fields() {
        let layout = layout_for(Os::Linux, Some(Compiler::Gcc), BuildType::Debug);
        assert_eq!(
            layout.build_folder_vars,
            vec![SettingsKey::Os, SettingsKey::BuildType]
        );
        // The vars are reported in multi-config mode as well.
        let layout = layout_for(Os::Windows, Some(Compiler::Msvc), BuildType::Debug);
        assert_eq!(
            layout.build_folder_vars,
            vec![SettingsKey::Os, SettingsKey::BuildType]
        );
    }
}
