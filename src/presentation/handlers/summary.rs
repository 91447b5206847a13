use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::WebsiteLoader;
use crate::presentation::state::AppState;

use super::api_types::SummaryResponse;

pub async fn summary_handler<W>(State(state): State<AppState<W>>) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    let session = state.session.read().await;
    let summary = state.chat_service.summary(&session);
    (StatusCode::OK, Json(SummaryResponse { summary }))
}
