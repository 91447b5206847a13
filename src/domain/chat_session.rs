use std::sync::Arc;

use super::{ChunkStore, Message};

pub const NOT_LOADED_GREETING: &str = "Load a website to start chatting.";
pub const LOADED_GREETING: &str = "Website loaded! Ask anything 😊";

/// Explicit per-user session context: the current chunk store and the
/// transcript, most recent message last.
#[derive(Debug, Clone)]
pub struct ChatSession {
    chunk_store: Option<Arc<ChunkStore>>,
    history: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            chunk_store: None,
            history: vec![Message::assistant(NOT_LOADED_GREETING)],
        }
    }

    pub fn chunk_store(&self) -> Option<&Arc<ChunkStore>> {
        self.chunk_store.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.chunk_store.is_some()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Swaps in a freshly loaded store and restarts the transcript.
    pub fn install(&mut self, store: ChunkStore) {
        self.chunk_store = Some(Arc::new(store));
        self.history = vec![Message::assistant(LOADED_GREETING)];
    }

    /// Restarts the transcript, keeping the loaded store.
    pub fn clear_chat(&mut self) {
        self.history = vec![Message::assistant(LOADED_GREETING)];
    }

    pub fn record_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.history.push(Message::user(question));
        self.history.push(Message::assistant(answer));
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
