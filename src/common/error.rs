use thiserror::Error;

use crate::infrastructure::filesystem::ConfigStoreError;

/// Errors that end a run before any repository is touched.
///
/// Repository errors never reach this type; they stay inside a rejected
/// [`crate::domain::entities::RepoOutcome`].
#[derive(Error, Debug)]
pub enum MultiRepoError {
    #[error(transparent)]
    Config(#[from] ConfigStoreError),

    #[error("No home directory: pass --home or set HOME")]
    HomeNotSet,
}
