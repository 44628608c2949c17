//! `status`, `pull` and `push` for one working copy.

use std::path::Path;

use super::git_output;
use crate::infrastructure::process::command_executor::write_stderr_block;
use super::scm_interface::{GitCommand, GitRunner, ScmError};
use crate::domain::entities::{PullResult, PushResult, RepoStatus};

/// Changed files plus the upstream annotation of the checked-out branch.
pub async fn status(runner: &dyn GitRunner, path: &Path) -> Result<RepoStatus, ScmError> {
    let status_output = runner.run(GitCommand::StatusShort, path).await?;
    let changed_lines = git_output::parse_status_lines(&status_output);

    let branch_output = runner.run(GitCommand::BranchVerbose, path).await?;
    let current_branch = git_output::find_current_branch(&branch_output).ok_or_else(|| {
        ScmError::CurrentBranchNotFound {
            path: path.to_path_buf(),
        }
    })?;

    let branch_info = git_output::extract_branch_info(current_branch).ok_or_else(|| {
        ScmError::BranchInfoNotExtracted {
            path: path.to_path_buf(),
            line: current_branch.to_string(),
        }
    })?;

    Ok(RepoStatus::new(changed_lines, branch_info))
}

pub async fn pull(runner: &dyn GitRunner, path: &Path) -> Result<PullResult, ScmError> {
    let output = runner.run(GitCommand::Pull, path).await?;
    Ok(git_output::parse_pull_output(&output))
}

pub async fn push(runner: &dyn GitRunner, path: &Path) -> Result<PushResult, ScmError> {
    let output = runner.run(GitCommand::PushPorcelain, path).await?;
    if runner.verbose() {
        write_stderr_block(&push_echo(path, &output));
    }
    Ok(git_output::parse_push_output(&output))
}

/// Raw porcelain output of one push, for the verbose echo.
fn push_echo(path: &Path, output: &str) -> String {
    format!("#OJbFMQ Git push output ({})\n{:?}\n", path.display(), output)
}
