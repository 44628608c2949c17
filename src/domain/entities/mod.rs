pub mod config;
pub mod outcome;
pub mod repo;

pub use config::{MultiRepoConfig, CONFIG_FILE_NAME};
pub use outcome::{PullResult, PushResult, RepoOutcome, RepoStatus};
pub use repo::RepoDescriptor;
