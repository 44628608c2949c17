//! Version-control seam.
//!
//! Everything that knows how git formats its text output lives behind
//! [`GitRunner`] and the pure parsers in [`git_output`], so orchestration and
//! presentation never see raw command lines.

pub mod git_output;
pub mod git_scm;
pub mod operations;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{GitCommand, GitRunner, ScmError};
