//! `slipway layout` command
//!
//! Prints the resolved output layout for a settings combination so CI
//! scripts and IDE integrations can locate build outputs without
//! re-deriving the policy themselves.

use anyhow::Result;

use crate::cli::LayoutArgs;
use slipway::core::policy::resolve_policy;
use slipway::core::settings::Settings;
use slipway::layout::resolve_layout;

pub fn execute(args: LayoutArgs) -> Result<()> {
    let settings = Settings::parse(
        &args.settings.os,
        args.settings.compiler.as_deref(),
        &args.settings.build_type,
        &args.settings.arch,
    )?;

    let policy = resolve_policy(&settings);
    let layout = resolve_layout(&policy, &settings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("build dir:      {}", layout.build_dir.display());
        println!("generators dir: {}", layout.generators_dir.display());
        println!(
            "partitioned by: {}",
            layout
                .build_folder_vars
                .iter()
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
