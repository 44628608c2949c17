use anyhow::Result;
use std::path::PathBuf;

use super::{git_runner, load_config};
use crate::application::use_cases::StatusCheckUseCase;
use crate::presentation::ui::OutcomeDisplay;

/// Handler for the status command
pub struct StatusCommand {
    pub home: PathBuf,
    pub verbose: bool,
}

impl StatusCommand {
    pub fn new(home: PathBuf, verbose: bool) -> Self {
        Self { home, verbose }
    }

    pub async fn execute(&self) -> Result<()> {
        let config = load_config(&self.home).await?;

        let use_case = StatusCheckUseCase::new(git_runner(self.verbose));
        let outcomes = use_case.execute(&config.repos).await;

        OutcomeDisplay::stdio().print_status(&outcomes)?;
        Ok(())
    }
}
