use futures::future::join_all;
use std::future::Future;

use crate::domain::entities::{RepoDescriptor, RepoOutcome};
use crate::infrastructure::scm::ScmError;

/// Run `operation` against every repository at once and wait for all of them
/// to settle.
///
/// Exactly one outcome is returned per input repository, in input order,
/// whatever order the tasks finish in. A failing (or panicking) repository
/// becomes a rejected outcome and never cancels its siblings. There is no
/// concurrency cap, timeout or retry.
pub async fn run_all<T, F, Fut>(repos: &[RepoDescriptor], operation: F) -> Vec<RepoOutcome<T>>
where
    T: Send + 'static,
    F: Fn(RepoDescriptor) -> Fut,
    Fut: Future<Output = Result<T, ScmError>> + Send + 'static,
{
    tracing::debug!("starting {} repository tasks", repos.len());

    let tasks: Vec<_> = repos
        .iter()
        .cloned()
        .map(|repo| tokio::spawn(operation(repo)))
        .collect();

    let results = join_all(tasks).await;

    repos
        .iter()
        .cloned()
        .zip(results)
        .map(|(repo, joined)| {
            let result = match joined {
                Ok(result) => result,
                Err(join_err) => {
                    tracing::warn!(repo = %repo.name, "repository task failed: {}", join_err);
                    Err(ScmError::TaskFailed(format!(
                        "{} ({})",
                        join_err,
                        repo.path.display()
                    )))
                }
            };
            RepoOutcome::new(repo, result)
        })
        .collect()
}
