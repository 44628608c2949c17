pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;

use self::commands::{PullCommand, PushCommand, StatusCommand};
use crate::common::error::MultiRepoError;
use crate::common::result::MultiRepoResult;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    " for ",
    env!("BUILD_TARGET"),
    ")"
);

/// git-multi-repo - Report and synchronize many git working copies at once
#[derive(Debug, Parser)]
#[command(name = "git-multi-repo")]
#[command(about = "Report and synchronize many git working copies at once")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The user's home directory, where .git-multi-repo.json lives
    #[arg(long, global = true, env = "HOME", value_name = "PATH")]
    pub home: Option<PathBuf>,

    /// Echo every git command and its output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show local changes and upstream tracking of every repository
    Status,

    /// Run `git pull` in every repository
    Pull,

    /// Run `git push` in every repository
    Push,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    /// `--home`, else `$HOME`.
    fn home(&self) -> MultiRepoResult<PathBuf> {
        self.cli.home.clone().ok_or(MultiRepoError::HomeNotSet)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        // Handle the command
        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        let Some(command) = self.cli.command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        let home = self.home()?;
        let verbose = self.cli.verbose;

        match command {
            Commands::Status => StatusCommand::new(home, verbose).execute().await,
            Commands::Pull => PullCommand::new(home, verbose).execute().await,
            Commands::Push => PushCommand::new(home, verbose).execute().await,
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_version_carries_build_metadata() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains(env!("GIT_HASH")));
        assert!(LONG_VERSION.contains(env!("BUILD_TARGET")));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["git-multi-repo", "--home", "/home/me", "status"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/home/me")));
        assert_eq!(cli.command, Some(Commands::Status));
        assert!(!cli.verbose);

        let cli =
            Cli::try_parse_from(["git-multi-repo", "--home", "/h", "push", "--verbose"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Push));
        assert!(cli.verbose);

        let cli =
            Cli::try_parse_from(["git-multi-repo", "--home", "/h", "--no-color", "pull"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Pull));
        assert!(cli.no_color);
    }

    #[test]
    fn test_home_after_subcommand() {
        let cli = Cli::try_parse_from(["git-multi-repo", "status", "--home", "/x"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Status));
        assert_eq!(cli.home, Some(PathBuf::from("/x")));

        let cli = Cli::try_parse_from(["git-multi-repo", "push", "-v", "--home", "/y"]).unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/y")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["git-multi-repo", "--home", "/h"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommands_take_no_arguments() {
        assert!(Cli::try_parse_from(["git-multi-repo", "--home", "/h", "status", "extra"]).is_err());
    }
}
