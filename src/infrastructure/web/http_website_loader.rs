use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::application::ports::{WebsiteLoader, WebsiteLoaderError};
use crate::infrastructure::text_processing::{extract_page_text, normalize_page_text};

pub struct HttpWebsiteLoader {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl HttpWebsiteLoader {
    pub fn new(
        user_agent: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
        max_body_bytes: usize,
    ) -> Result<Self, WebsiteLoaderError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| WebsiteLoaderError::RequestFailed(format!("client: {}", e)))?;

        Ok(Self {
            client,
            max_body_bytes,
        })
    }
}

impl HttpWebsiteLoader {
    /// Reads the body chunk by chunk and stops as soon as the limit is passed,
    /// so a response without `Content-Length` cannot exhaust memory.
    async fn read_bounded(
        &self,
        mut response: reqwest::Response,
    ) -> Result<Vec<u8>, WebsiteLoaderError> {
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| WebsiteLoaderError::RequestFailed(format!("body: {}", e)))?
        {
            if body.len().saturating_add(chunk.len()) > self.max_body_bytes {
                return Err(WebsiteLoaderError::TooLarge {
                    limit: self.max_body_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Html,
    PlainText,
}

fn classify_content_type(content_type: Option<&str>) -> Result<PageKind, WebsiteLoaderError> {
    let Some(raw) = content_type else {
        return Ok(PageKind::Html);
    };
    let mime = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "" | "text/html" | "application/xhtml+xml" => Ok(PageKind::Html),
        "application/json" | "application/xml" => Ok(PageKind::PlainText),
        m if m.starts_with("text/") => Ok(PageKind::PlainText),
        _ => Err(WebsiteLoaderError::UnsupportedContentType(mime)),
    }
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decodes with the declared charset, falling back to UTF-8. A byte order
/// mark takes precedence over the header.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "Replaced malformed bytes while decoding");
    }
    text.into_owned()
}

#[async_trait]
impl WebsiteLoader for HttpWebsiteLoader {
    async fn fetch_text(&self, url: &Url) -> Result<String, WebsiteLoaderError> {
        tracing::debug!(url = %url, "Fetching website");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| WebsiteLoaderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Website returned error status");
            return Err(WebsiteLoaderError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(length) = response.content_length() {
            if usize::try_from(length).map_or(true, |l| l > self.max_body_bytes) {
                return Err(WebsiteLoaderError::TooLarge {
                    limit: self.max_body_bytes,
                });
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let kind = classify_content_type(content_type.as_deref())?;

        let body = self.read_bounded(response).await?;
        let raw = decode_body(&body, content_type.as_deref());
        let text = match kind {
            PageKind::Html => extract_page_text(&raw),
            PageKind::PlainText => normalize_page_text(&raw),
        };

        tracing::debug!(
            url = %url,
            bytes = body.len(),
            chars = text.chars().count(),
            kind = ?kind,
            "Website text extracted"
        );

        Ok(text)
    }
}
