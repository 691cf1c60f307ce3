//! Implementation of `slipway configure`.
//!
//! One configuration pass, run strictly in dependency order: derive the
//! policy, verify the declared requirements against the package store,
//! stage vendor assets, resolve the output layout and write the
//! toolchain file. The first failure aborts the pass; partial writes
//! are left in place for inspection and the pass is re-run from scratch
//! after the operator fixes the configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::policy::{resolve_policy, PolicyFlags};
use crate::core::requirement::RequirementSet;
use crate::core::settings::Settings;
use crate::layout::{resolve_layout, LayoutDescriptor};
use crate::recipe;
use crate::stage::stage_assets;
use crate::store::{verify_requirements, DirStore, InstalledPackage};
use crate::toolchain::{self, CacheVariableSet, TOOLCHAIN_FILE_NAME};
use crate::util::context::GlobalContext;

/// Everything one configuration pass produced, for reporting.
#[derive(Debug)]
pub struct ConfigureOutcome {
    pub policy: PolicyFlags,
    pub requirements: RequirementSet,
    pub resolved: Vec<InstalledPackage>,
    pub layout: LayoutDescriptor,
    pub cache_vars: CacheVariableSet,
    /// Absolute path of the written toolchain file.
    pub toolchain_file: PathBuf,
    /// Number of staged asset files.
    pub staged_files: usize,
}

/// Run one configuration pass.
pub fn configure(ctx: &GlobalContext, settings: &Settings) -> Result<ConfigureOutcome> {
    let policy = resolve_policy(settings);
    tracing::debug!(
        "policy: is_web={} generator_mode={:?}",
        policy.is_web,
        policy.generator_mode
    );

    let requirements = recipe::declare_requirements(settings);
    let store = DirStore::new(ctx.store_root());
    let resolved = verify_requirements(&store, &requirements)
        .context("dependency resolution failed")?;
    for pkg in &resolved {
        tracing::debug!("resolved {}/{} at {}", pkg.name, pkg.version, pkg.dir.display());
    }

    let report = stage_assets(
        &store,
        &requirements,
        &recipe::asset_manifest(),
        ctx.project_root(),
    )
    .context("asset staging failed")?;

    let layout = resolve_layout(&policy, settings);

    let cache_vars = toolchain::emit(settings, &policy, &ctx.config().analysis);
    let toolchain_file = ctx
        .project_root()
        .join(&layout.generators_dir)
        .join(TOOLCHAIN_FILE_NAME);
    toolchain::write_toolchain_file(&cache_vars, &toolchain_file)
        .context("toolchain emission failed")?;

    Ok(ConfigureOutcome {
        policy,
        requirements,
        resolved,
        layout,
        cache_vars,
        toolchain_file,
        staged_files: report.len(),
    })
}
