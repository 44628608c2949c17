use std::sync::Arc;

use crate::application::services::run_all;
use crate::domain::entities::{PullResult, RepoDescriptor, RepoOutcome};
use crate::infrastructure::scm::{operations, GitRunner};

/// 全リポジトリに対して `git pull` を実行するユースケース
pub struct PullRepositoriesUseCase {
    runner: Arc<dyn GitRunner>,
}

impl PullRepositoriesUseCase {
    pub fn new(runner: Arc<dyn GitRunner>) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, repos: &[RepoDescriptor]) -> Vec<RepoOutcome<PullResult>> {
        let runner = Arc::clone(&self.runner);
        run_all(repos, move |repo| {
            let runner = Arc::clone(&runner);
            async move { operations::pull(runner.as_ref(), repo.path()).await }
        })
        .await
    }
}
