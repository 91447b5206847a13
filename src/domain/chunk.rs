/// A bounded segment of page text produced by a splitter.
///
/// Chunks carry no identity beyond their content; `offset` only records where
/// the segment started inside the extracted page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub offset: usize,
}

impl Chunk {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Self::new(text, 0)
    }
}
