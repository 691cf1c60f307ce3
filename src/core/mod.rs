//! Core data structures for slipway.
//!
//! The foundational types for one configuration pass:
//! - the immutable settings model
//! - requirement declarations (runtime vs test-only)
//! - derived platform policy flags

pub mod policy;
pub mod requirement;
pub mod settings;

pub use policy::{resolve_policy, GeneratorMode, PolicyFlags};
pub use requirement::{Requirement, RequirementSet};
pub use settings::{BuildType, Compiler, Os, Settings, SettingsError, SettingsKey};
