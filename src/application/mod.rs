//! Application layer: one use case per command, all sharing the fan-out
//! orchestrator.

pub mod services;
pub mod use_cases;
