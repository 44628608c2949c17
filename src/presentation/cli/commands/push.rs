use anyhow::Result;
use std::path::PathBuf;

use super::{git_runner, load_config};
use crate::application::use_cases::PushRepositoriesUseCase;
use crate::presentation::ui::OutcomeDisplay;

/// Handler for the push command
pub struct PushCommand {
    pub home: PathBuf,
    pub verbose: bool,
}

impl PushCommand {
    pub fn new(home: PathBuf, verbose: bool) -> Self {
        Self { home, verbose }
    }

    pub async fn execute(&self) -> Result<()> {
        let config = load_config(&self.home).await?;

        let use_case = PushRepositoriesUseCase::new(git_runner(self.verbose));
        let outcomes = use_case.execute(&config.repos).await;

        OutcomeDisplay::stdio().print_push(&outcomes)?;
        Ok(())
    }
}
