//! Requirement declarations.
//!
//! A [`Requirement`] names a third-party library and the version
//! constraint the project pins it to. Requirements are partitioned into
//! runtime requirements (linked into the final artifact) and test-only
//! requirements (visible only to the test-binary build).

use std::fmt;

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

/// A single library requirement: name plus version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    name: String,
    version_req: VersionReq,
}

impl Requirement {
    /// Create a requirement with an explicit version requirement.
    pub fn new(name: impl Into<String>, version_req: VersionReq) -> Self {
        Requirement {
            name: name.into(),
            version_req,
        }
    }

    /// Create a requirement pinned to an exact version.
    ///
    /// Panics if `version` is not a valid semver version; the declared
    /// set is project source code, so a bad pin is a programming error.
    pub fn pinned(name: impl Into<String>, version: &str) -> Self {
        let req = VersionReq::parse(&format!("={version}"))
            .unwrap_or_else(|e| panic!("invalid pinned version `{version}`: {e}"));
        Requirement::new(name, req)
    }

    /// Get the library name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the version requirement.
    pub fn version_req(&self) -> &VersionReq {
        &self.version_req
    }

    /// Check whether an installed version satisfies this requirement.
    pub fn matches_version(&self, version: &Version) -> bool {
        self.version_req.matches(version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version_req)
    }
}

/// The declared requirements of the project, partitioned by linkage.
///
/// Insertion order is preserved for readability of listings and emitted
/// files; it carries no resolution semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    runtime: Vec<Requirement>,
    test: Vec<Requirement>,
}

impl RequirementSet {
    pub fn new() -> Self {
        RequirementSet::default()
    }

    /// Add a runtime requirement (propagates into the final link).
    pub fn require(&mut self, req: Requirement) {
        self.runtime.push(req);
    }

    /// Add a test-only requirement (visible only to test binaries).
    pub fn test_require(&mut self, req: Requirement) {
        self.test.push(req);
    }

    /// Runtime requirements, in declaration order.
    pub fn runtime(&self) -> &[Requirement] {
        &self.runtime
    }

    /// Test-only requirements, in declaration order.
    pub fn test(&self) -> &[Requirement] {
        &self.test
    }

    /// All requirements, runtime first.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.runtime.iter().chain(self.test.iter())
    }

    /// Look up a runtime requirement by library name.
    pub fn runtime_by_name(&self, name: &str) -> Option<&Requirement> {
        self.runtime.iter().find(|r| r.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.test.is_empty()
    }
}
