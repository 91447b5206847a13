mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnsweringSettings, ChunkingSettings, FetchSettings, LoggingSettings, ServerSettings, Settings,
};
