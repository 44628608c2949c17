//! # git-multi-repo - status, pull and push across many git working copies
//!
//! `git-multi-repo` reads a list of working copies from
//! `$HOME/.git-multi-repo.json`, runs one git operation against all of them
//! concurrently and prints a consolidated, color-coded summary.
//!
//! ## Quick Start
//!
//! 1. Create `~/.git-multi-repo.json`:
//!
//! ```json
//! {
//!   "repos": [
//!     { "name": "dotfiles", "path": "/home/me/dotfiles" },
//!     { "name": "site", "alias": "blog", "path": "/home/me/src/site" }
//!   ]
//! }
//! ```
//!
//! 2. Check every repository:
//!
//! ```bash
//! git-multi-repo status
//! ```
//!
//! 3. Pull or push all of them:
//!
//! ```bash
//! git-multi-repo pull
//! git-multi-repo push
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: repository descriptors, configuration and typed results
//! - [`application`]: one use case per command plus the fan-out orchestrator
//! - [`infrastructure`]: process execution, configuration file, git seam
//! - [`presentation`]: CLI interface and terminal rendering
//! - [`common`]: shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use git_multi_repo::application::use_cases::StatusCheckUseCase;
//! use git_multi_repo::infrastructure::{ConfigStore, GitScm};
//!
//! # async fn example() -> git_multi_repo::Result<()> {
//! let config = ConfigStore::new("/home/me").load().await?;
//! let use_case = StatusCheckUseCase::new(Arc::new(GitScm::new()));
//!
//! for outcome in use_case.execute(&config.repos).await {
//!     match &outcome.result {
//!         Ok(status) => println!("{}: {}", outcome.repo.name, status.branch_info),
//!         Err(e) => eprintln!("{}: {}", outcome.repo.name, e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::MultiRepoError;
pub use crate::common::result::MultiRepoResult as Result;
