pub mod pull_repositories;
pub mod push_repositories;
pub mod status_check;

pub use pull_repositories::PullRepositoriesUseCase;
pub use push_repositories::PushRepositoriesUseCase;
pub use status_check::StatusCheckUseCase;
