//! # Application Layer
//!
//! Use cases coordinating the domain with the study content and the
//! generative endpoint.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
