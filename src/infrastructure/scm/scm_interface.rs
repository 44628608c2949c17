use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infrastructure::process::ProcessError;

#[cfg(test)]
use mockall::automock;

/// Per-repository errors. Any of these rejects the outcome of one repository
/// and leaves its siblings alone.
#[derive(Debug, Error)]
pub enum ScmError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("#m5nOET Failed to find current branch in {}", .path.display())]
    CurrentBranchNotFound { path: PathBuf },

    #[error("#S3XkPT Failed to extract current branch info in {} from line '{line}'", .path.display())]
    BranchInfoNotExtracted { path: PathBuf, line: String },

    #[error("Repository task failed: {0}")]
    TaskFailed(String),
}

/// The git invocations this tool relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitCommand {
    /// `git status --short`
    StatusShort,
    /// `git branch -vv`
    BranchVerbose,
    /// `git pull`
    Pull,
    /// `git push --porcelain`
    PushPorcelain,
}

impl GitCommand {
    pub fn args(self) -> &'static [&'static str] {
        match self {
            GitCommand::StatusShort => &["status", "--short"],
            GitCommand::BranchVerbose => &["branch", "-vv"],
            GitCommand::Pull => &["pull"],
            GitCommand::PushPorcelain => &["push", "--porcelain"],
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args().join(" "))
    }
}

/// Runs one git command inside a working copy and returns its output with
/// trailing whitespace removed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GitRunner: Send + Sync {
    async fn run(&self, command: GitCommand, cwd: &Path) -> Result<String, ScmError>;

    /// Whether diagnostic echo is enabled.
    fn verbose(&self) -> bool {
        false
    }
}
