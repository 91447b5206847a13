mod chat_session;
mod chunk;
mod chunk_store;
mod message;
mod message_role;

pub use chat_session::{ChatSession, LOADED_GREETING, NOT_LOADED_GREETING};
pub use chunk::Chunk;
pub use chunk_store::{ChunkStore, take_first};
pub use message::Message;
pub use message_role::MessageRole;
