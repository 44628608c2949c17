//! Infrastructure layer modules
//!
//! This layer provides concrete implementations for external system interactions:
//! - Process execution (the `git` binary)
//! - File system operations (the JSON configuration file)
//! - SCM operations and parsing of git's text output

pub mod filesystem;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{ConfigStore, ConfigStoreError};
pub use process::{CommandExecutor, ExecutionConfig, ProcessError};
pub use scm::{GitCommand, GitRunner, GitScm, ScmError};
