//! Domain layer: the configured repositories and the typed results produced
//! for them.

pub mod entities;
pub mod value_objects;
