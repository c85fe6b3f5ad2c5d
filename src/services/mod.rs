pub mod chat_service;
pub mod rules;
pub mod search_client;
pub mod summarizer;

pub use chat_service::*;
pub use rules::*;
pub use search_client::*;
pub use summarizer::*;
