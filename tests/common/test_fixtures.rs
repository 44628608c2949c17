//! Test fixtures for creating git repositories
//!
//! Layout inside one temp dir:
//!
//! ```text
//! seed/        first commit is made here
//! remote.git/  bare clone of seed, acts as "origin"
//! work/        clone of remote.git with main tracking origin/main
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::test_helpers::git;

pub struct GitFixture {
    pub temp_dir: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
}

impl GitFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let seed = root.join("seed");
        std::fs::create_dir_all(&seed).unwrap();
        git(&seed, &["init", "--quiet"]);
        git(&seed, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        commit_file(&seed, "README.md", "# Test Repository\n", "Initial commit");

        let remote = root.join("remote.git");
        git(root, &["clone", "--quiet", "--bare", "seed", "remote.git"]);

        let work = root.join("work");
        git(root, &["clone", "--quiet", "remote.git", "work"]);

        Self {
            temp_dir,
            remote,
            work,
        }
    }

    /// Another clone of the same remote.
    pub fn clone_as(&self, name: &str) -> PathBuf {
        git(self.temp_dir.path(), &["clone", "--quiet", "remote.git", name]);
        self.temp_dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Write `file` in `repo` and commit it.
pub fn commit_file(repo: &Path, file: &str, content: &str, message: &str) {
    std::fs::write(repo.join(file), content).unwrap();
    git(repo, &["add", file]);
    git(repo, &["commit", "--quiet", "-m", message]);
}
