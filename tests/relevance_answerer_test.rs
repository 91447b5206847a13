use sitechat::application::services::{
    ANSWER_LABEL, RelevanceAnswerer, SelectionStrategy, clean_text, score_chunk, tokenize_question,
};
use sitechat::domain::Chunk;

fn chunks(texts: &[&str]) -> Vec<Chunk> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Chunk::new(*text, i * 100))
        .collect()
}

fn excerpt(answer: &str) -> &str {
    answer
        .strip_prefix(&format!("{}\n\n", ANSWER_LABEL))
        .expect("answer must start with the label")
}

#[test]
fn given_mixed_case_question_when_tokenizing_then_lowercases_and_drops_short_words() {
    let tokens = tokenize_question("What IS the Capital of France");
    assert_eq!(tokens, vec!["what", "the", "capital", "france"]);
}

#[test]
fn given_repeated_word_when_tokenizing_then_keeps_duplicates() {
    let tokens = tokenize_question("paris paris");
    assert_eq!(tokens, vec!["paris", "paris"]);
}

#[test]
fn given_only_short_words_when_tokenizing_then_returns_no_tokens() {
    assert!(tokenize_question("is it ok").is_empty());
    assert!(tokenize_question("   ").is_empty());
}

#[test]
fn given_token_occurring_many_times_when_scoring_then_counts_once() {
    let tokens = tokenize_question("rust");
    let chunk = Chunk::new("Rust rust RUST trust", 0);
    assert_eq!(score_chunk(&tokens, &chunk), 1);
}

#[test]
fn given_token_inside_longer_word_when_scoring_then_substring_matches() {
    let tokens = tokenize_question("cap");
    let chunk = Chunk::new("The capital city", 0);
    assert_eq!(score_chunk(&tokens, &chunk), 1);
}

#[test]
fn given_capital_question_when_answering_then_returns_paris_chunk_only() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["Paris is the capital of France.", "Rome is in Italy."]);

    let answer = answerer.answer("capital France", &store);

    assert!(answer.starts_with("Relevant excerpt from website:\n\n"));
    assert!(answer.contains("Paris"));
    assert!(!answer.contains("Rome"));
}

#[test]
fn given_short_word_question_when_answering_then_falls_back_to_first_two_chunks() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["First chunk text.", "Second chunk text.", "Third chunk text."]);

    let answer = answerer.answer("is it ok", &store);

    let expected = clean_text("First chunk text.\n\nSecond chunk text.");
    assert_eq!(excerpt(&answer), expected);
}

#[test]
fn given_no_matching_chunk_when_selecting_then_uses_leading_chunks() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["alpha", "beta", "gamma"]);

    let selection = answerer.select("zebra crossing", &store);

    assert_eq!(selection.strategy, SelectionStrategy::NoMatch);
    let texts: Vec<&str> = selection.chunks.iter().map(|s| s.chunk.text.as_str()).collect();
    assert_eq!(texts, vec!["alpha", "beta"]);
}

#[test]
fn given_empty_question_when_selecting_then_reports_no_tokens() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["alpha", "beta", "gamma"]);

    let selection = answerer.select("", &store);

    assert_eq!(selection.strategy, SelectionStrategy::NoTokens);
    assert_eq!(selection.chunks.len(), 2);
}

#[test]
fn given_one_chunk_matching_unique_word_when_answering_then_it_comes_before_others() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&[
        "General introduction to the site.",
        "Opening hours are listed on the contact page.",
        "Our bakery sells sourdough every morning.",
    ]);

    let answer = answerer.answer("sourdough", &store);
    let text = excerpt(&answer);

    assert!(text.starts_with("Our bakery sells sourdough every morning."));
    assert!(!text.contains("General introduction"));
}

#[test]
fn given_higher_scoring_later_chunk_when_answering_then_it_is_listed_first() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&[
        "The museum opens at nine.",
        "Tickets for the museum cost ten euros at the museum desk.",
        "Parking is free.",
    ]);

    let selection = answerer.select("museum tickets cost", &store);

    assert_eq!(selection.strategy, SelectionStrategy::Scored);
    assert_eq!(selection.chunks[0].score, 3);
    assert_eq!(
        selection.chunks[0].chunk.text,
        "Tickets for the museum cost ten euros at the museum desk."
    );
    assert_eq!(selection.chunks[1].score, 1);
    assert_eq!(selection.chunks[1].chunk.text, "The museum opens at nine.");
}

#[test]
fn given_equal_scores_when_selecting_then_original_order_is_kept() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["garden one", "garden two", "garden three"]);

    let selection = answerer.select("garden", &store);

    let texts: Vec<&str> = selection.chunks.iter().map(|s| s.chunk.text.as_str()).collect();
    assert_eq!(texts, vec!["garden one", "garden two"]);
}

#[test]
fn given_only_one_positive_score_when_selecting_then_zero_scores_are_excluded() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&["nothing here", "the harbour is busy", "nothing there"]);

    let selection = answerer.select("harbour", &store);

    assert_eq!(selection.chunks.len(), 1);
    assert_eq!(selection.chunks[0].chunk.text, "the harbour is busy");
}

#[test]
fn given_fewer_chunks_than_top_n_when_falling_back_then_returns_all_available() {
    let answerer = RelevanceAnswerer::new(5, 1500, 7000);
    let store = chunks(&["only one", "and two"]);

    let selection = answerer.select("ok", &store);

    assert_eq!(selection.chunks.len(), 2);
}

#[test]
fn given_no_chunks_when_answering_then_returns_bare_label() {
    let answerer = RelevanceAnswerer::default();

    assert_eq!(
        answerer.answer("anything at all", &[]),
        "Relevant excerpt from website:\n\n"
    );
    assert_eq!(answerer.answer("", &[]), "Relevant excerpt from website:\n\n");
}

#[test]
fn given_duplicate_lines_across_selected_chunks_when_answering_then_they_appear_once() {
    let answerer = RelevanceAnswerer::default();
    let store = chunks(&[
        "Menu\nPizza margherita\nContact us",
        "Menu\nPizza diavola\nContact us",
    ]);

    let answer = answerer.answer("pizza", &store);

    assert_eq!(
        excerpt(&answer),
        "Menu\nPizza margherita\nContact us\nPizza diavola"
    );
}

#[test]
fn given_long_context_when_answering_then_excerpt_is_capped() {
    let answerer = RelevanceAnswerer::default();
    let long_chunk = (0..400)
        .map(|i| format!("keyword sentence {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let store = vec![Chunk::new(long_chunk, 0)];

    let answer = answerer.answer("keyword", &store);

    assert_eq!(excerpt(&answer).chars().count(), 1500);
}

#[test]
fn given_custom_excerpt_length_when_answering_then_uses_it() {
    let answerer = RelevanceAnswerer::new(2, 10, 7000);
    let store = chunks(&["abcdefghijklmnopqrstuvwxyz"]);

    let answer = answerer.answer("abcdef", &store);

    assert_eq!(excerpt(&answer), "abcdefghij");
}

#[test]
fn given_question_with_unit_separator_when_tokenizing_then_splits_words() {
    let tokens = tokenize_question("Price\x1fpolicy\u{2028}TODAY\u{3000}ok");

    assert_eq!(tokens, vec!["price", "policy", "today"]);
}
