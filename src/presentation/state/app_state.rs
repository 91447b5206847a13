use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::WebsiteLoader;
use crate::application::services::ChatService;
use crate::domain::ChatSession;

pub struct AppState<W>
where
    W: WebsiteLoader,
{
    pub chat_service: Arc<ChatService<W>>,
    pub session: Arc<RwLock<ChatSession>>,
}

impl<W> AppState<W>
where
    W: WebsiteLoader,
{
    pub fn new(chat_service: Arc<ChatService<W>>) -> Self {
        Self {
            chat_service,
            session: Arc::new(RwLock::new(ChatSession::new())),
        }
    }
}

impl<W> Clone for AppState<W>
where
    W: WebsiteLoader,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            session: Arc::clone(&self.session),
        }
    }
}
