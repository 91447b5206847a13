use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::WebsiteLoader;
use crate::presentation::state::AppState;

use super::api_types::ChatHistoryResponse;

pub async fn chat_history_handler<W>(State(state): State<AppState<W>>) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    let session = state.session.read().await;
    (
        StatusCode::OK,
        Json(ChatHistoryResponse::from_history(session.history())),
    )
}

#[tracing::instrument(skip(state))]
pub async fn clear_chat_handler<W>(State(state): State<AppState<W>>) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    let mut session = state.session.write().await;
    session.clear_chat();
    tracing::info!("Chat history cleared");
    (
        StatusCode::OK,
        Json(ChatHistoryResponse::from_history(session.history())),
    )
}
