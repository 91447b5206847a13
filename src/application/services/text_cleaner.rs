use std::collections::HashSet;

pub const MAX_CLEANED_CHARS: usize = 7000;

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Unicode white space plus the ASCII information separators `\x1c`..`\x1f`.
pub(crate) fn is_text_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trims lines, drops blank and repeated lines, then caps the result at
/// [`MAX_CLEANED_CHARS`] characters.
pub fn clean_text(text: &str) -> String {
    clean_text_with_limit(text, MAX_CLEANED_CHARS)
}

/// Same pipeline as [`clean_text`] with an explicit character cap.
///
/// The cap may cut the final line. The cut line is trimmed again (and dropped
/// if it became blank or repeats an earlier line) so that cleaning a cleaned
/// string is a no-op.
pub fn clean_text_with_limit(text: &str, max_chars: usize) -> String {
    let cleaned = unique_lines(text);

    if cleaned.chars().count() <= max_chars {
        return cleaned;
    }

    let truncated: String = cleaned.chars().take(max_chars).collect();
    unique_lines(&truncated)
}

fn unique_lines(text: &str) -> String {
    let mut seen = HashSet::new();

    text.split(LINE_BREAKS)
        .map(|line| line.trim_matches(is_text_space))
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
