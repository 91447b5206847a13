use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub chunking: ChunkingSettings,
    pub answering: AnsweringSettings,
    pub fetch: FetchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnsweringSettings {
    pub top_n: usize,
    pub excerpt_chars: usize,
    pub max_context_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl FetchSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP_*`
    /// variables (`APP_SERVER__PORT=8080` sets `server.port`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults without reading files or the process environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::default_builder()?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Self::default_builder()?
            .add_source(File::with_name(&environment.settings_file()).required(false)))
    }

    fn default_builder()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("chunking.chunk_size", 1500)?
            .set_default("chunking.chunk_overlap", 200)?
            .set_default("answering.top_n", 2)?
            .set_default("answering.excerpt_chars", 1500)?
            .set_default("answering.max_context_chars", 7000)?
            .set_default("fetch.user_agent", concat!("sitechat/", env!("CARGO_PKG_VERSION")))?
            .set_default("fetch.connect_timeout_secs", 10)?
            .set_default("fetch.request_timeout_secs", 30)?
            .set_default("fetch.max_body_bytes", 5 * 1024 * 1024)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}
