use std::collections::HashMap;

use url::Url;

use crate::application::ports::{WebsiteLoader, WebsiteLoaderError};

/// Serves pre-registered page text by URL. Used by tests and offline demos.
#[derive(Debug, Default, Clone)]
pub struct InMemoryWebsiteLoader {
    pages: HashMap<String, String>,
}

impl InMemoryWebsiteLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, text: impl Into<String>) -> Self {
        let key = Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string());
        self.pages.insert(key, text.into());
        self
    }
}

#[async_trait::async_trait]
impl WebsiteLoader for InMemoryWebsiteLoader {
    async fn fetch_text(&self, url: &Url) -> Result<String, WebsiteLoaderError> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| WebsiteLoaderError::NotFound(url.to_string()))
    }
}
