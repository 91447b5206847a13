use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;

use super::Chunk;

/// Immutable, ordered chunks for one loaded website.
///
/// The chunk list is shared behind an `Arc<[Chunk]>` and is replaced as a
/// whole when another website is loaded, never edited in place.
#[derive(Debug, Clone)]
pub struct ChunkStore {
    source_url: Url,
    chunks: Arc<[Chunk]>,
    loaded_at: DateTime<Utc>,
}

impl ChunkStore {
    pub fn new(source_url: Url, chunks: Vec<Chunk>) -> Self {
        Self {
            source_url,
            chunks: chunks.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn first(&self) -> Option<&Chunk> {
        self.chunks.first()
    }

    /// First `n` chunks in original order; all of them when fewer exist.
    pub fn take_first(&self, n: usize) -> &[Chunk] {
        take_first(&self.chunks, n)
    }
}

/// Bounded prefix of a chunk slice. Never panics on short input.
pub fn take_first(chunks: &[Chunk], n: usize) -> &[Chunk] {
    &chunks[..n.min(chunks.len())]
}
