mod chat_service;
mod relevance_answerer;
mod text_cleaner;

pub use chat_service::{AskError, ChatService, LoadError};
pub use relevance_answerer::{
    ANSWER_LABEL, DEFAULT_EXCERPT_CHARS, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_TOP_N,
    RelevanceAnswerer, ScoredChunk, Selection, SelectionStrategy, score_chunk, tokenize_question,
};
pub use text_cleaner::{MAX_CLEANED_CHARS, clean_text, clean_text_with_limit};
