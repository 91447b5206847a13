pub mod api_types;
mod ask;
mod chat;
mod health;
mod summary;
mod website;

pub use ask::ask_handler;
pub use chat::{chat_history_handler, clear_chat_handler};
pub use health::health_handler;
pub use summary::summary_handler;
pub use website::load_website_handler;
