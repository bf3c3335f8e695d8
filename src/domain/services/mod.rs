//! Domain services: pure functions over the domain models.

mod prompt_builder;

pub use prompt_builder::*;
