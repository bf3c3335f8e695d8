mod gemini_client;
mod mock_generative_client;
mod static_content_repository;

pub use gemini_client::*;
pub use mock_generative_client::*;
pub use static_content_repository::*;
