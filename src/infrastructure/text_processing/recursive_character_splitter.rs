use std::collections::VecDeque;

use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::Chunk;

pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Splits text on the coarsest separator that keeps pieces under
/// `chunk_size` characters, falling back to finer separators for pieces that
/// are still too long, then greedily merges pieces back into chunks that
/// share up to `chunk_overlap` characters with their predecessor.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, TextSplitterError> {
        Self::with_separators(chunk_size, chunk_overlap, &DEFAULT_SEPARATORS)
    }

    pub fn with_separators(
        chunk_size: usize,
        chunk_overlap: usize,
        separators: &[&str],
    ) -> Result<Self, TextSplitterError> {
        if chunk_size == 0 {
            return Err(TextSplitterError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(TextSplitterError::InvalidConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                chunk_overlap, chunk_size
            )));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: separators.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        let position = separators
            .iter()
            .position(|sep| sep.is_empty() || text.contains(sep.as_str()))
            .unwrap_or(separators.len().saturating_sub(1));

        let (separator, finer) = match separators.get(position) {
            Some(sep) => (sep.as_str(), &separators[position + 1..]),
            None => ("", &separators[..0]),
        };

        let pieces: Vec<String> = if separator.is_empty() {
            text.chars().map(String::from).collect()
        } else {
            text.split(separator)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect()
        };

        let mut output = Vec::new();
        let mut pending = Vec::new();

        for piece in pieces {
            if char_len(&piece) < self.chunk_size {
                pending.push(piece);
                continue;
            }

            if !pending.is_empty() {
                output.extend(self.merge_pieces(&pending, separator));
                pending.clear();
            }

            if finer.is_empty() {
                output.push(piece);
            } else {
                output.extend(self.split_recursive(&piece, finer));
            }
        }

        if !pending.is_empty() {
            output.extend(self.merge_pieces(&pending, separator));
        }

        output
    }

    fn merge_pieces(&self, pieces: &[String], separator: &str) -> Vec<String> {
        let separator_len = char_len(separator);
        let mut merged = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0;

        for piece in pieces {
            let len = char_len(piece);
            let joint = if window.is_empty() { 0 } else { separator_len };

            if total + len + joint > self.chunk_size && !window.is_empty() {
                push_joined(&mut merged, &window, separator);

                loop {
                    let joint = if window.is_empty() { 0 } else { separator_len };
                    let overflows = total > 0 && total + len + joint > self.chunk_size;
                    if total <= self.chunk_overlap && !overflows {
                        break;
                    }
                    let Some(front) = window.pop_front() else {
                        break;
                    };
                    let joint = if window.is_empty() { 0 } else { separator_len };
                    total -= char_len(front) + joint;
                }
            }

            window.push_back(piece.as_str());
            total += len + if window.len() > 1 { separator_len } else { 0 };
        }

        push_joined(&mut merged, &window, separator);
        merged
    }
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(&self, text: &str) -> Result<Vec<Chunk>, TextSplitterError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let pieces = self.split_recursive(text, &self.separators);

        // A chunk can start no earlier than `chunk_overlap` characters before
        // the end of its predecessor.
        let mut chunks: Vec<Chunk> = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let search_start = chunks
                .last()
                .map(|previous| {
                    (previous.offset + previous.char_len()).saturating_sub(self.chunk_overlap)
                })
                .unwrap_or(0);
            let byte_start = byte_index(text, search_start);
            let offset = match text[byte_start..].find(piece.as_str()) {
                Some(found) => search_start + char_len(&text[byte_start..byte_start + found]),
                None => search_start.min(char_len(text)),
            };
            chunks.push(Chunk::new(piece, offset));
        }

        Ok(chunks)
    }
}

fn push_joined(out: &mut Vec<String>, window: &VecDeque<&str>, separator: &str) {
    let joined = window.iter().copied().collect::<Vec<_>>().join(separator);
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
