//! # Domain Layer
//!
//! Study content, assist state and the rules that shape them.
//! This layer is independent of transport and presentation.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
