mod text_splitter;
mod website_loader;

pub use text_splitter::{TextSplitter, TextSplitterError};
pub use website_loader::{WebsiteLoader, WebsiteLoaderError};
