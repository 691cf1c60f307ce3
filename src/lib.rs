//! Slipway - build-configuration orchestrator for a native/web graphics app
//!
//! This crate provides the core library functionality for slipway: the
//! settings model, requirement declaration, platform policy, asset
//! staging, toolchain emission and build-output layout for one
//! configuration pass.

pub mod core;
pub mod layout;
pub mod ops;
pub mod recipe;
pub mod stage;
pub mod store;
pub mod toolchain;
pub mod util;

pub use crate::core::{
    policy::{resolve_policy, GeneratorMode, PolicyFlags},
    requirement::{Requirement, RequirementSet},
    settings::{BuildType, Compiler, Os, Settings, SettingsError},
};

pub use crate::layout::{resolve_layout, LayoutDescriptor};
pub use crate::util::context::GlobalContext;
