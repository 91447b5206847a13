use sitechat::application::ports::{TextSplitter, TextSplitterError};
use sitechat::infrastructure::text_processing::RecursiveCharacterSplitter;

const DEFAULT_CHUNK_SIZE: usize = 1500;
const DEFAULT_CHUNK_OVERLAP: usize = 200;

#[tokio::test]
async fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let splitter = RecursiveCharacterSplitter::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP).unwrap();

    assert!(splitter.split("").await.unwrap().is_empty());
    assert!(splitter.split("  \n\n  ").await.unwrap().is_empty());
}

#[tokio::test]
async fn given_text_shorter_than_chunk_size_when_splitting_then_returns_single_chunk() {
    let splitter = RecursiveCharacterSplitter::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP).unwrap();

    let chunks = splitter.split("Hello world.").await.unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "Hello world.");
    assert_eq!(chunks[0].offset, 0);
}

#[tokio::test]
async fn given_paragraphs_when_splitting_then_prefers_paragraph_boundaries() {
    let splitter = RecursiveCharacterSplitter::new(10, 0).unwrap();

    let chunks = splitter.split("aaaa\n\nbbbb\n\ncccc").await.unwrap();

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["aaaa\n\nbbbb", "cccc"]);
    assert_eq!(chunks[0].offset, 0);
    assert_eq!(chunks[1].offset, 12);
}

#[tokio::test]
async fn given_words_with_overlap_when_splitting_then_consecutive_chunks_share_words() {
    let splitter = RecursiveCharacterSplitter::new(13, 5).unwrap();

    let chunks = splitter
        .split("one two three four five six")
        .await
        .unwrap();

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["one two three", "three four", "four five six"]);
    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 8, 14]);
}

#[tokio::test]
async fn given_word_longer_than_chunk_size_when_splitting_then_falls_back_to_characters() {
    let splitter = RecursiveCharacterSplitter::new(10, 2).unwrap();

    let chunks = splitter.split("abcdefghijklmnopqrstuvwxy").await.unwrap();

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["abcdefghij", "ijklmnopqr", "qrstuvwxy"]);
    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 8, 16]);
}

#[tokio::test]
async fn given_long_document_when_splitting_with_defaults_then_chunks_respect_size_and_offsets() {
    let splitter = RecursiveCharacterSplitter::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP).unwrap();
    let text = (0..100)
        .map(|i| format!("Paragraph {i}. {}", "lorem ipsum dolor sit amet ".repeat(5)))
        .collect::<Vec<_>>()
        .join("\n\n");

    let chunks = splitter.split(&text).await.unwrap();

    assert!(chunks.len() > 1);
    let mut previous_offset = None;
    for chunk in &chunks {
        assert!(chunk.char_len() <= DEFAULT_CHUNK_SIZE);
        let at_offset: String = text.chars().skip(chunk.offset).take(chunk.char_len()).collect();
        assert_eq!(at_offset, chunk.text);
        if let Some(previous) = previous_offset {
            assert!(chunk.offset > previous);
        }
        previous_offset = Some(chunk.offset);
    }
    assert!(chunks[0].text.starts_with("Paragraph 0."));
    assert!(chunks.last().unwrap().text.contains("Paragraph 99."));
}

#[test]
fn given_overlap_not_smaller_than_chunk_size_when_constructing_then_rejects_config() {
    assert!(matches!(
        RecursiveCharacterSplitter::new(100, 100),
        Err(TextSplitterError::InvalidConfig(_))
    ));
    assert!(matches!(
        RecursiveCharacterSplitter::new(0, 0),
        Err(TextSplitterError::InvalidConfig(_))
    ));
}

#[tokio::test]
async fn given_repetitive_text_when_splitting_then_offsets_advance_by_chunk_minus_overlap() {
    let splitter = RecursiveCharacterSplitter::new(10, 3).unwrap();
    let text = format!("\u{2028}\u{2029}{}", "x".repeat(23));

    let chunks = splitter.split(&text).await.unwrap();

    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![2, 7, 14, 21]);
}

#[tokio::test]
async fn given_repeated_multibyte_chars_when_splitting_then_offsets_count_characters() {
    let splitter = RecursiveCharacterSplitter::new(10, 3).unwrap();
    let text = format!("{} x", "é".repeat(23));

    let chunks = splitter.split(&text).await.unwrap();

    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    assert_eq!(
        texts,
        vec!["é".repeat(10), "é".repeat(10), "é".repeat(9), "x".to_string()]
    );
    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 7, 14, 24]);
}
