pub mod display;

pub use display::OutcomeDisplay;
