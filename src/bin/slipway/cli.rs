//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Slipway - build-configuration orchestrator for a native/web graphics app
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one configuration pass (verify requirements, stage assets,
    /// emit the toolchain file)
    Configure(ConfigureArgs),

    /// Print the resolved build-output layout for a settings combination
    Layout(LayoutArgs),

    /// List the project's declared requirements
    Requirements(RequirementsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings supplied by the invoking build environment.
#[derive(Args)]
pub struct SettingsArgs {
    /// Target operating system (Windows, Linux, Macos, Emscripten)
    #[arg(long, env = "SLIPWAY_OS")]
    pub os: String,

    /// Compiler identity (msvc, gcc, clang, apple-clang)
    #[arg(long, env = "SLIPWAY_COMPILER")]
    pub compiler: Option<String>,

    /// Build configuration (Debug, Release, RelWithDebInfo, MinSizeRel)
    #[arg(long, env = "SLIPWAY_BUILD_TYPE", default_value = "Release")]
    pub build_type: String,

    /// Target architecture
    #[arg(long, env = "SLIPWAY_ARCH", default_value = "x86_64")]
    pub arch: String,
}

#[derive(Args)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Root of the installed-package store (overrides config)
    #[arg(long, env = "SLIPWAY_STORE")]
    pub store: Option<PathBuf>,

    /// Project root to configure (defaults to the current directory)
    #[arg(long)]
    pub project_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Emit the layout as JSON for external tooling
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RequirementsArgs {
    /// Target operating system the declaration is evaluated for
    #[arg(long, env = "SLIPWAY_OS", default_value = "Linux")]
    pub os: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
