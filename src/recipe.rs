//! The project recipe: what this application needs from the outside.
//!
//! Declares the third-party libraries the application links against and
//! the staging rules for vendor-shipped integration sources. This is
//! the one file that changes when the project picks up or drops a
//! dependency.

use crate::core::requirement::{Requirement, RequirementSet};
use crate::core::settings::Settings;
use crate::stage::{AssetEntry, AssetManifest};

/// Destination for staged UI-backend bindings, inside the project tree.
pub const BINDINGS_DEST: &str = "src/bindings";

/// Declare the project's requirements for the given settings.
///
/// The declared set is constant today; the settings parameter is part
/// of the contract so a target-conditional requirement (say, a native
/// only crash reporter) is a local change here rather than an API
/// change.
pub fn declare_requirements(_settings: &Settings) -> RequirementSet {
    let mut set = RequirementSet::new();

    // Runtime: linked into the final artifact.
    set.require(Requirement::pinned("sdl", "3.2.20"));
    set.require(Requirement::pinned("spdlog", "1.15.3"));
    set.require(Requirement::pinned("imgui", "1.92.0"));
    set.require(Requirement::pinned("glm", "1.0.1"));
    set.require(Requirement::pinned("nlohmann_json", "3.11.3"));
    set.require(Requirement::pinned("magic_enum", "0.9.7"));
    set.require(Requirement::pinned("tl-expected", "1.1.0"));

    // Test-only: visible to test binaries, never to the final link.
    set.test_require(Requirement::pinned("catch2", "3.7.1"));

    set
}

/// Staging rules for vendor-provided integration sources.
///
/// imgui ships its backend bindings as plain sources under
/// `res/bindings/`; the application compiles the SDL3 and WebGPU
/// backends as its own translation units.
pub fn asset_manifest() -> AssetManifest {
    AssetManifest::new(vec![
        AssetEntry::new("imgui", "res/bindings/imgui_impl_sdl3*", BINDINGS_DEST),
        AssetEntry::new("imgui", "res/bindings/imgui_impl_wgpu*", BINDINGS_DEST),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{BuildType, Os};

    #[test]
    fn test_declared_set_is_a_pure_function_of_settings() {
        let native = Settings::new(Os::Linux, None, BuildType::Debug, "x86_64");
        let web = Settings::new(Os::Emscripten, None, BuildType::Release, "wasm");
        assert_eq!(declare_requirements(&native), declare_requirements(&web));
    }

    #[test]
    fn test_runtime_and_test_partitions() {
        let settings = Settings::new(Os::Linux, None, BuildType::Debug, "x86_64");
        let set = declare_requirements(&settings);

        assert!(set.runtime_by_name("sdl").is_some());
        assert!(set.runtime_by_name("imgui").is_some());
        assert!(set.runtime_by_name("catch2").is_none());
        assert_eq!(set.test().len(), 1);
        assert_eq!(set.test()[0].name(), "catch2");
    }

    #[test]
    fn test_manifest_only_references_declared_packages() {
        let settings = Settings::new(Os::Linux, None, BuildType::Debug, "x86_64");
        let set = declare_requirements(&settings);

        for entry in asset_manifest().entries() {
            assert!(
                set.runtime_by_name(&entry.package).is_some(),
                "manifest entry references undeclared package `{}`",
                entry.package
            );
        }
    }
}
