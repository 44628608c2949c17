use crate::common::error::MultiRepoError;

/// Result type used across the crate's public API.
///
/// ```
/// use git_multi_repo::common::result::MultiRepoResult;
///
/// fn repo_count() -> MultiRepoResult<usize> {
///     Ok(3)
/// }
/// assert_eq!(repo_count().unwrap(), 3);
/// ```
pub type MultiRepoResult<T> = Result<T, MultiRepoError>;
