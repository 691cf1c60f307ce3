//! `slipway requirements` command

use anyhow::Result;

use crate::cli::RequirementsArgs;
use slipway::core::settings::Settings;
use slipway::recipe::declare_requirements;

pub fn execute(args: RequirementsArgs) -> Result<()> {
    // Build type and arch don't influence the declaration; os is taken
    // so conditional requirements show up for the right target.
    let settings = Settings::parse(&args.os, None, "Release", "x86_64")?;
    let set = declare_requirements(&settings);

    println!("# Runtime requirements:");
    for req in set.runtime() {
        println!("  {}", req);
    }

    println!();
    println!("# Test-only requirements:");
    for req in set.test() {
        println!("  {}", req);
    }

    Ok(())
}
