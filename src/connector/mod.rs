//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Generative text (Gemini `generateContent`, offline mock)
//! - Built-in study content
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
