use chrono::{DateTime, Utc};

use super::MessageRole;

/// One entry of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Assistant {
        content: String,
        created_at: DateTime<Utc>,
    },
    User {
        content: String,
        created_at: DateTime<Utc>,
    },
}

impl Message {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant {
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn role(&self) -> MessageRole {
        match self {
            Self::Assistant { .. } => MessageRole::Assistant,
            Self::User { .. } => MessageRole::User,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Assistant { content, .. } | Self::User { content, .. } => content,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Assistant { created_at, .. } | Self::User { created_at, .. } => *created_at,
        }
    }

    /// Wall-clock time shown next to a chat bubble, `HH:MM`.
    pub fn display_time(&self) -> String {
        self.created_at().format("%H:%M").to_string()
    }
}
