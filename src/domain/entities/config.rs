use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::repo::RepoDescriptor;

/// File name looked up inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".git-multi-repo.json";

/// Contents of `.git-multi-repo.json`.
///
/// ```json
/// { "repos": [ { "name": "dotfiles", "alias": "home", "path": "/home/me/dotfiles" } ] }
/// ```
///
/// The order of `repos` is the order results are printed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRepoConfig {
    pub repos: Vec<RepoDescriptor>,
}

impl MultiRepoConfig {
    pub fn new(repos: Vec<RepoDescriptor>) -> Self {
        Self { repos }
    }

    /// Location of the configuration file for the given home directory.
    pub fn config_path(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}
