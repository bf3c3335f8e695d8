mod content_repository;
mod generative_client;

pub use content_repository::*;
pub use generative_client::*;
