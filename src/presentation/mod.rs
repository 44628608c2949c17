//! Presentation layer: clap CLI and terminal rendering of outcomes.

pub mod cli;
pub mod ui;
