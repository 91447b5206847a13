use crate::domain::{Chunk, take_first};

use super::text_cleaner::{clean_text_with_limit, is_text_space};

pub const ANSWER_LABEL: &str = "Relevant excerpt from website:";
pub const DEFAULT_TOP_N: usize = 2;
pub const DEFAULT_EXCERPT_CHARS: usize = 1500;
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 7000;

const MIN_TOKEN_CHARS: usize = 3;

/// Answers questions with the most keyword-relevant excerpt of the loaded chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceAnswerer {
    top_n: usize,
    excerpt_chars: usize,
    max_context_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Chunks were ranked by token overlap.
    Scored,
    /// The question had no usable tokens.
    NoTokens,
    /// No chunk contained any question token.
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredChunk<'a> {
    pub score: usize,
    pub chunk: &'a Chunk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub strategy: SelectionStrategy,
    pub chunks: Vec<ScoredChunk<'a>>,
}

impl RelevanceAnswerer {
    pub fn new(top_n: usize, excerpt_chars: usize, max_context_chars: usize) -> Self {
        Self {
            top_n,
            excerpt_chars,
            max_context_chars,
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Labelled excerpt for `question`.
    ///
    /// An empty chunk slice yields the bare label followed by a blank line.
    pub fn answer(&self, question: &str, chunks: &[Chunk]) -> String {
        let context = self.best_context(question, chunks);
        let snippet: String = context.chars().take(self.excerpt_chars).collect();
        format!("{}\n\n{}", ANSWER_LABEL, snippet)
    }

    /// Cleaned text of the selected chunks, joined by blank lines before cleaning.
    pub fn best_context(&self, question: &str, chunks: &[Chunk]) -> String {
        let selection = self.select(question, chunks);
        let combined = selection
            .chunks
            .iter()
            .map(|s| s.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        clean_text_with_limit(&combined, self.max_context_chars)
    }

    /// Picks up to `top_n` chunks.
    ///
    /// Ranking is by descending score; equal scores keep their original chunk
    /// order. Zero-score chunks are never returned from the scored path.
    pub fn select<'a>(&self, question: &str, chunks: &'a [Chunk]) -> Selection<'a> {
        let tokens = tokenize_question(question);

        if tokens.is_empty() {
            tracing::debug!("Question has no usable tokens, using leading chunks");
            return self.leading(chunks, SelectionStrategy::NoTokens);
        }

        let mut scored: Vec<ScoredChunk<'a>> = chunks
            .iter()
            .map(|chunk| ScoredChunk {
                score: score_chunk(&tokens, chunk),
                chunk,
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let top: Vec<ScoredChunk<'a>> = scored
            .into_iter()
            .take(self.top_n)
            .filter(|s| s.score > 0)
            .collect();

        if top.is_empty() {
            tracing::debug!(
                tokens = tokens.len(),
                "No chunk matched any token, using leading chunks"
            );
            return self.leading(chunks, SelectionStrategy::NoMatch);
        }

        tracing::debug!(
            tokens = tokens.len(),
            selected = top.len(),
            best_score = top[0].score,
            "Selected chunks by keyword overlap"
        );

        Selection {
            strategy: SelectionStrategy::Scored,
            chunks: top,
        }
    }

    fn leading<'a>(&self, chunks: &'a [Chunk], strategy: SelectionStrategy) -> Selection<'a> {
        Selection {
            strategy,
            chunks: take_first(chunks, self.top_n)
                .iter()
                .map(|chunk| ScoredChunk { score: 0, chunk })
                .collect(),
        }
    }
}

impl Default for RelevanceAnswerer {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOP_N,
            DEFAULT_EXCERPT_CHARS,
            DEFAULT_MAX_CONTEXT_CHARS,
        )
    }
}

/// Lowercased words of at least three characters. Words are separated by
/// Unicode white space or the ASCII information separators.
/// Repeated words are kept.
pub fn tokenize_question(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split(is_text_space)
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Number of tokens found as substrings of the lowercased chunk text.
/// Each token counts at most once no matter how often it occurs.
pub fn score_chunk(tokens: &[String], chunk: &Chunk) -> usize {
    let haystack = chunk.text.to_lowercase();
    tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count()
}
