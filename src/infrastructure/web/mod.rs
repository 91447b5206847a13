mod http_website_loader;
mod in_memory_website_loader;

pub use http_website_loader::HttpWebsiteLoader;
pub use in_memory_website_loader::InMemoryWebsiteLoader;
