//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: throwaway git repositories and
//! configuration files.

#![allow(dead_code)]

pub mod test_fixtures;
pub mod test_helpers;
