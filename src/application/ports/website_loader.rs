use async_trait::async_trait;
use url::Url;

/// Fetches a web page and reduces it to plain text.
#[async_trait]
pub trait WebsiteLoader: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> Result<String, WebsiteLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebsiteLoaderError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },
    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("no page registered for {0}")]
    NotFound(String),
}
