//! Command implementations

pub mod completions;
pub mod configure;
pub mod layout;
pub mod requirements;
