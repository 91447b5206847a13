use std::sync::Arc;

use url::Url;

use crate::application::ports::{
    TextSplitter, TextSplitterError, WebsiteLoader, WebsiteLoaderError,
};
use crate::domain::{ChatSession, ChunkStore};

use super::RelevanceAnswerer;

const SUMMARY_CHARS: usize = 600;

pub struct ChatService<W>
where
    W: WebsiteLoader,
{
    website_loader: Arc<W>,
    text_splitter: Arc<dyn TextSplitter>,
    answerer: RelevanceAnswerer,
}

impl<W> ChatService<W>
where
    W: WebsiteLoader,
{
    pub fn new(
        website_loader: Arc<W>,
        text_splitter: Arc<dyn TextSplitter>,
        answerer: RelevanceAnswerer,
    ) -> Self {
        Self {
            website_loader,
            text_splitter,
            answerer,
        }
    }

    pub fn answerer(&self) -> &RelevanceAnswerer {
        &self.answerer
    }

    /// Fetches and splits a website into a new chunk store.
    ///
    /// The caller decides when to install the result into a session, so a
    /// failed load leaves the previous store untouched.
    #[tracing::instrument(skip(self, raw_url), fields(url = %raw_url))]
    pub async fn load_website(&self, raw_url: &str) -> Result<ChunkStore, LoadError> {
        let url = parse_website_url(raw_url)?;

        let text = self
            .website_loader
            .fetch_text(&url)
            .await
            .map_err(LoadError::Fetch)?;
        tracing::debug!(chars = text.chars().count(), "Fetched website text");

        let chunks = self
            .text_splitter
            .split(&text)
            .await
            .map_err(LoadError::Split)?;

        if chunks.is_empty() {
            tracing::warn!("Website produced no text chunks");
            return Err(LoadError::EmptyContent(url.to_string()));
        }

        tracing::info!(chunk_count = chunks.len(), "Website indexed");
        Ok(ChunkStore::new(url, chunks))
    }

    /// Answers `question` against the session's store and records the exchange.
    pub fn ask(&self, session: &mut ChatSession, question: &str) -> Result<String, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let store = session
            .chunk_store()
            .cloned()
            .ok_or(AskError::NoWebsiteLoaded)?;

        let answer = self.answerer.answer(question, store.chunks());
        session.record_exchange(question, answer.clone());

        Ok(answer)
    }

    /// Opening text of the first chunk on a single line, or `None` before a load.
    pub fn summary(&self, session: &ChatSession) -> Option<String> {
        let first = session.chunk_store()?.first()?;
        let head: String = first
            .text
            .chars()
            .take(SUMMARY_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        Some(format!("{}...", head))
    }
}

fn parse_website_url(raw_url: &str) -> Result<Url, LoadError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(LoadError::MissingUrl);
    }

    let url = Url::parse(trimmed).map_err(|e| LoadError::InvalidUrl(format!("{trimmed}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LoadError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme '{other}'"
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("please enter a website URL")]
    MissingUrl,
    #[error("invalid website URL: {0}")]
    InvalidUrl(String),
    #[error("failed to load website: {0}")]
    Fetch(WebsiteLoaderError),
    #[error("failed to split website text: {0}")]
    Split(TextSplitterError),
    #[error("website has no readable text: {0}")]
    EmptyContent(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("no website loaded")]
    NoWebsiteLoaded,
    #[error("question is empty")]
    EmptyQuestion,
}
