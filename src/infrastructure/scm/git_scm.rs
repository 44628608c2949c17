use async_trait::async_trait;
use std::path::Path;

use super::scm_interface::{GitCommand, GitRunner, ScmError};
use crate::infrastructure::process::{CommandExecutor, ExecutionConfig};

/// [`GitRunner`] backed by the `git` binary.
#[derive(Debug, Clone)]
pub struct GitScm {
    git_executable: String,
    verbose: bool,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
            verbose: false,
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
            ..Self::default()
        }
    }

    /// Echo every command and its output to stderr
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn executable(&self) -> &str {
        &self.git_executable
    }
}

#[async_trait]
impl GitRunner for GitScm {
    async fn run(&self, command: GitCommand, cwd: &Path) -> Result<String, ScmError> {
        let config = ExecutionConfig::new()
            .with_working_directory(cwd)
            .with_verbose(self.verbose);

        let output = CommandExecutor::execute(&self.git_executable, command.args(), &config).await?;
        Ok(output)
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::process::ProcessError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let scm = GitScm::new();
        assert_eq!(scm.executable(), "git");
        assert!(!GitRunner::verbose(&scm));

        let scm = GitScm::with_executable("/opt/git/bin/git").with_verbose(true);
        assert_eq!(scm.executable(), "/opt/git/bin/git");
        assert!(GitRunner::verbose(&scm));
    }

    #[tokio::test]
    async fn test_missing_executable_is_process_error() {
        let temp_dir = TempDir::new().unwrap();
        let scm = GitScm::with_executable("no-such-git-binary-4711");

        let err = scm
            .run(GitCommand::StatusShort, temp_dir.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScmError::Process(ProcessError::SpawnFailed { .. })
        ));
    }
}
