use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::WebsiteLoader;
use crate::application::services::AskError;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::api_types::{AskRequest, AskResponse, error_response};

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<W>(
    State(state): State<AppState<W>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    tracing::debug!(question = %sanitize_for_log(&request.question), "Processing question");

    let mut session = state.session.write().await;
    match state.chat_service.ask(&mut session, &request.question) {
        Ok(answer) => {
            tracing::info!(answer_chars = answer.chars().count(), "Question answered");
            (StatusCode::OK, Json(AskResponse { answer })).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Question rejected");
            let status = match e {
                AskError::NoWebsiteLoaded => StatusCode::CONFLICT,
                AskError::EmptyQuestion => StatusCode::BAD_REQUEST,
            };
            error_response(status, e.to_string())
        }
    }
}
