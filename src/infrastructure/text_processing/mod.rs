mod html_text_extractor;
mod recursive_character_splitter;

pub use html_text_extractor::{extract_page_text, normalize_page_text};
pub use recursive_character_splitter::{DEFAULT_SEPARATORS, RecursiveCharacterSplitter};
