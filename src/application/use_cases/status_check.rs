use std::sync::Arc;

use crate::application::services::run_all;
use crate::domain::entities::{RepoDescriptor, RepoOutcome, RepoStatus};
use crate::infrastructure::scm::{operations, GitRunner};

/// ステータス確認のユースケース
pub struct StatusCheckUseCase {
    runner: Arc<dyn GitRunner>,
}

impl StatusCheckUseCase {
    /// 新しいStatusCheckUseCaseインスタンスを作成
    pub fn new(runner: Arc<dyn GitRunner>) -> Self {
        Self { runner }
    }

    /// 全リポジトリのステータスを並列に確認
    ///
    /// 結果は設定ファイルの順序で返される。
    pub async fn execute(&self, repos: &[RepoDescriptor]) -> Vec<RepoOutcome<RepoStatus>> {
        let runner = Arc::clone(&self.runner);
        run_all(repos, move |repo| {
            let runner = Arc::clone(&runner);
            async move { operations::status(runner.as_ref(), repo.path()).await }
        })
        .await
    }
}
