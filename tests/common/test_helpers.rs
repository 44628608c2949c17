//! Test helper functions and utilities

use std::path::Path;
use std::process::Command;

use git_multi_repo::domain::entities::{MultiRepoConfig, RepoDescriptor, CONFIG_FILE_NAME};

/// Whether a usable `git` binary is on PATH. Tests that need real
/// repositories return early without it.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Run git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("Failed to run git");

    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Write `.git-multi-repo.json` into `home`.
pub fn write_config(home: &Path, repos: Vec<RepoDescriptor>) {
    let config = MultiRepoConfig::new(repos);
    let json = serde_json::to_string_pretty(&config).expect("Failed to serialize config");
    std::fs::write(home.join(CONFIG_FILE_NAME), json).expect("Failed to write config");
}
