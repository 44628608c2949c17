pub mod pull;
pub mod push;
pub mod status;

pub use pull::*;
pub use push::*;
pub use status::*;

use std::path::Path;
use std::sync::Arc;

use crate::common::result::MultiRepoResult;
use crate::domain::entities::MultiRepoConfig;
use crate::infrastructure::filesystem::ConfigStore;
use crate::infrastructure::scm::{GitRunner, GitScm};

/// Load the repository list; any failure here ends the run.
pub(crate) async fn load_config(home: &Path) -> MultiRepoResult<MultiRepoConfig> {
    let config = ConfigStore::new(home).load().await?;
    Ok(config)
}

pub(crate) fn git_runner(verbose: bool) -> Arc<dyn GitRunner> {
    Arc::new(GitScm::new().with_verbose(verbose))
}
