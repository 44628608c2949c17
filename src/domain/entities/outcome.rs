use serde::Serialize;

use super::repo::RepoDescriptor;
use crate::domain::value_objects::BranchInfo;
use crate::infrastructure::scm::ScmError;

/// Result of `status` for a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    /// Lines of `git status --short`, in output order.
    pub changed_lines: Vec<String>,
    pub has_changes: bool,
    pub branch_info: BranchInfo,
}

impl RepoStatus {
    pub fn new(changed_lines: Vec<String>, branch_info: BranchInfo) -> Self {
        Self {
            has_changes: !changed_lines.is_empty(),
            changed_lines,
            branch_info,
        }
    }
}

/// Result of `pull` for a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullResult {
    pub output: String,
    pub no_changes: bool,
}

/// Result of `push` for a single repository.
///
/// `output` is the porcelain output without its final `Done` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushResult {
    pub output: String,
    pub no_changes: bool,
}

/// Settled outcome of one operation against one repository: either the typed
/// payload (fulfilled) or the error that stopped it (rejected).
#[derive(Debug)]
pub struct RepoOutcome<T> {
    pub repo: RepoDescriptor,
    pub result: Result<T, ScmError>,
}

impl<T> RepoOutcome<T> {
    pub fn new(repo: RepoDescriptor, result: Result<T, ScmError>) -> Self {
        Self { repo, result }
    }

    pub fn is_fulfilled(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }

    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ScmError> {
        self.result.as_ref().err()
    }
}
