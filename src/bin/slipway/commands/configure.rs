//! `slipway configure` command

use anyhow::Result;

use crate::cli::ConfigureArgs;
use slipway::core::settings::Settings;
use slipway::ops::configure;
use slipway::util::GlobalContext;

pub fn execute(args: ConfigureArgs, verbose: bool, color: bool) -> Result<()> {
    let mut ctx = match args.project_root {
        Some(root) => GlobalContext::with_project_root(root)?,
        None => GlobalContext::new()?,
    };
    ctx.set_verbose(verbose);
    ctx.set_color(color);
    if let Some(store) = args.store {
        ctx.set_store_root(store);
    }

    let settings = Settings::parse(
        &args.settings.os,
        args.settings.compiler.as_deref(),
        &args.settings.build_type,
        &args.settings.arch,
    )?;

    let outcome = configure(&ctx, &settings)?;

    println!(
        "Configured {} {} ({})",
        settings.os,
        settings.build_type,
        if outcome.policy.is_multi_config() {
            "multi-config generator"
        } else {
            "single-config generator"
        }
    );
    println!(
        "  requirements: {} runtime, {} test-only",
        outcome.requirements.runtime().len(),
        outcome.requirements.test().len()
    );
    println!("  staged files: {}", outcome.staged_files);
    println!("  build dir:    {}", outcome.layout.build_dir.display());
    println!("  toolchain:    {}", outcome.toolchain_file.display());

    Ok(())
}
