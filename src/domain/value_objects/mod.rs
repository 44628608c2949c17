pub mod branch_info;

pub use branch_info::BranchInfo;
