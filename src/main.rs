use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sitechat::application::services::{ChatService, RelevanceAnswerer};
use sitechat::infrastructure::observability::{TracingConfig, init_tracing};
use sitechat::infrastructure::text_processing::RecursiveCharacterSplitter;
use sitechat::infrastructure::web::HttpWebsiteLoader;
use sitechat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    let json_format = settings.logging.enable_json
        || std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
    init_tracing(&TracingConfig::new(
        environment.as_str(),
        json_format,
        &settings.logging.level,
    ));

    let website_loader = Arc::new(
        HttpWebsiteLoader::new(
            &settings.fetch.user_agent,
            settings.fetch.connect_timeout(),
            settings.fetch.request_timeout(),
            settings.fetch.max_body_bytes,
        )
        .context("Failed to build HTTP client")?,
    );

    let text_splitter = Arc::new(
        RecursiveCharacterSplitter::new(
            settings.chunking.chunk_size,
            settings.chunking.chunk_overlap,
        )
        .context("Invalid chunking settings")?,
    );

    let answerer = RelevanceAnswerer::new(
        settings.answering.top_n,
        settings.answering.excerpt_chars,
        settings.answering.max_context_chars,
    );

    let chat_service = Arc::new(ChatService::new(website_loader, text_splitter, answerer));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState::new(chat_service));

    tracing::info!(%addr, "Listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
