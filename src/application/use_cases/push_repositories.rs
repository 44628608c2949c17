use std::sync::Arc;

use crate::application::services::run_all;
use crate::domain::entities::{PushResult, RepoDescriptor, RepoOutcome};
use crate::infrastructure::scm::{operations, GitRunner};

/// 全リポジトリに対して `git push --porcelain` を実行するユースケース
pub struct PushRepositoriesUseCase {
    runner: Arc<dyn GitRunner>,
}

impl PushRepositoriesUseCase {
    pub fn new(runner: Arc<dyn GitRunner>) -> Self {
        Self { runner }
    }

    pub async fn execute(&self, repos: &[RepoDescriptor]) -> Vec<RepoOutcome<PushResult>> {
        let runner = Arc::clone(&self.runner);
        run_all(repos, move |repo| {
            let runner = Arc::clone(&runner);
            async move { operations::push(runner.as_ref(), repo.path()).await }
        })
        .await
    }
}
