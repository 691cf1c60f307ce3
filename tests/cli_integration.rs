//! CLI integration tests for slipway.
//!
//! These tests verify the full configure workflow against a populated
//! on-disk package store, plus the layout and requirements commands.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Fake home shared by every invocation, so a developer machine's
/// user-level slipway config cannot leak into the tests.
static TEST_HOME: LazyLock<TempDir> = LazyLock::new(|| TempDir::new().unwrap());

/// Get the slipway binary command.
fn slipway() -> Command {
    let mut cmd = Command::cargo_bin("slipway").unwrap();
    cmd.env("HOME", TEST_HOME.path());
    cmd.env("XDG_CACHE_HOME", TEST_HOME.path().join("cache"));
    cmd
}

/// Create a temporary directory for test stores and projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Populate a package store with every declared requirement and the
/// imgui binding sources the stager expects.
fn populate_store(store: &Path) {
    let packages = [
        ("sdl", "3.2.20"),
        ("spdlog", "1.15.3"),
        ("imgui", "1.92.0"),
        ("glm", "1.0.1"),
        ("nlohmann_json", "3.11.3"),
        ("magic_enum", "0.9.7"),
        ("tl-expected", "1.1.0"),
        ("catch2", "3.7.1"),
    ];
    for (name, version) in packages {
        fs::create_dir_all(store.join(name).join(version)).unwrap();
    }

    let bindings = store.join("imgui/1.92.0/res/bindings");
    fs::create_dir_all(&bindings).unwrap();
    for file in [
        "imgui_impl_sdl3.cpp",
        "imgui_impl_sdl3.h",
        "imgui_impl_wgpu.cpp",
        "imgui_impl_wgpu.h",
    ] {
        fs::write(bindings.join(file), "// binding source").unwrap();
    }
}

// ============================================================================
// slipway layout
// ============================================================================

#[test]
fn test_layout_single_config_partitions_paths() {
    slipway()
        .args(["layout", "--os", "Emscripten", "--build-type", "Release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Emscripten/Release"));
}

#[test]
fn test_layout_multi_config_reuses_build_tree() {
    slipway()
        .args([
            "layout",
            "--os",
            "Windows",
            "--compiler",
            "msvc",
            "--build-type",
            "Debug",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("build dir:      build\n"))
        .stdout(predicate::str::contains("build/generators"));
}

#[test]
fn test_layout_json_is_machine_readable() {
    let output = slipway()
        .args([
            "layout",
            "--os",
            "Linux",
            "--compiler",
            "gcc",
            "--build-type",
            "Debug",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layout["build_dir"], "build/Linux/Debug");
    assert_eq!(layout["generators_dir"], "build/Linux/Debug/generators");
    assert_eq!(layout["build_folder_vars"][0], "settings.os");
    assert_eq!(layout["build_folder_vars"][1], "settings.build_type");
}

#[test]
fn test_layout_rejects_unknown_os() {
    slipway()
        .args(["layout", "--os", "Freestanding"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown os"));
}

// ============================================================================
// slipway requirements
// ============================================================================

#[test]
fn test_requirements_lists_both_partitions() {
    slipway()
        .args(["requirements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sdl/=3.2.20"))
        .stdout(predicate::str::contains("spdlog/=1.15.3"))
        .stdout(predicate::str::contains("Test-only"))
        .stdout(predicate::str::contains("catch2/=3.7.1"));
}

// ============================================================================
// slipway configure
// ============================================================================

#[test]
fn test_configure_native_writes_toolchain_with_cppcheck() {
    let tmp = temp_dir();
    let store = tmp.path().join("store");
    let project = tmp.path().join("project");
    populate_store(&store);
    fs::create_dir_all(&project).unwrap();

    slipway()
        .args([
            "configure",
            "--os",
            "Linux",
            "--compiler",
            "gcc",
            "--build-type",
            "Debug",
        ])
        .arg("--store")
        .arg(&store)
        .arg("--project-root")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("single-config generator"));

    let toolchain = project.join("build/Linux/Debug/generators/slipway_toolchain.cmake");
    let contents = fs::read_to_string(&toolchain).unwrap();
    assert!(contents.contains("set(CMAKE_OS \"Linux\""));
    assert!(contents.contains("cppcheck;--inline-suppr"));

    // Bindings staged into the project source tree.
    assert!(project.join("src/bindings/imgui_impl_sdl3.cpp").exists());
    assert!(project.join("src/bindings/imgui_impl_wgpu.h").exists());
}

#[test]
fn test_configure_web_omits_static_analysis() {
    let tmp = temp_dir();
    let store = tmp.path().join("store");
    let project = tmp.path().join("project");
    populate_store(&store);
    fs::create_dir_all(&project).unwrap();

    slipway()
        .args(["configure", "--os", "Emscripten", "--build-type", "Release"])
        .arg("--store")
        .arg(&store)
        .arg("--project-root")
        .arg(&project)
        .assert()
        .success();

    let toolchain =
        project.join("build/Emscripten/Release/generators/slipway_toolchain.cmake");
    let contents = fs::read_to_string(&toolchain).unwrap();
    assert!(contents.contains("set(CMAKE_OS \"Emscripten\""));
    assert!(!contents.contains("cppcheck"));
    assert!(!contents.contains("clang-tidy"));
}

#[test]
fn test_configure_msvc_uses_shared_build_tree() {
    let tmp = temp_dir();
    let store = tmp.path().join("store");
    let project = tmp.path().join("project");
    populate_store(&store);
    fs::create_dir_all(&project).unwrap();

    slipway()
        .args([
            "configure",
            "--os",
            "Windows",
            "--compiler",
            "msvc",
            "--build-type",
            "Debug",
        ])
        .arg("--store")
        .arg(&store)
        .arg("--project-root")
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-config generator"));

    assert!(project
        .join("build/generators/slipway_toolchain.cmake")
        .exists());
}

#[test]
fn test_configure_fails_on_empty_store() {
    let tmp = temp_dir();
    let project = tmp.path().join("project");
    fs::create_dir_all(&project).unwrap();

    slipway()
        .args(["configure", "--os", "Linux", "--compiler", "gcc"])
        .arg("--store")
        .arg(tmp.path().join("empty-store"))
        .arg("--project-root")
        .arg(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dependency resolution failed"));
}

#[test]
fn test_configure_fails_when_bindings_are_missing() {
    let tmp = temp_dir();
    let store = tmp.path().join("store");
    let project = tmp.path().join("project");
    populate_store(&store);
    fs::create_dir_all(&project).unwrap();

    // Remove the staged sources so the glob matches nothing.
    fs::remove_dir_all(store.join("imgui/1.92.0/res")).unwrap();

    slipway()
        .args(["configure", "--os", "Linux", "--compiler", "gcc"])
        .arg("--store")
        .arg(&store)
        .arg("--project-root")
        .arg(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("asset staging failed"));

    // The failed pass must not have produced a toolchain file.
    assert!(!project.join("build").exists());
}
