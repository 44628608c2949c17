use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream tracking annotation of the checked-out branch, exactly as
/// `git branch -vv` prints it, e.g. `[origin/main: ahead 2, behind 1]`.
///
/// Only the `ahead` / `behind` substrings are ever inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchInfo(String);

impl BranchInfo {
    pub fn new(annotation: impl Into<String>) -> Self {
        Self(annotation.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_ahead(&self) -> bool {
        self.0.contains("ahead")
    }

    pub fn is_behind(&self) -> bool {
        self.0.contains("behind")
    }

    /// True when the branch and its upstream point at different commits.
    pub fn is_diverged(&self) -> bool {
        self.is_ahead() || self.is_behind()
    }
}

impl fmt::Display for BranchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchInfo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
