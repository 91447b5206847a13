use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::WebsiteLoader;
use crate::application::services::LoadError;
use crate::domain::LOADED_GREETING;
use crate::presentation::state::AppState;

use super::api_types::{LoadWebsiteRequest, LoadWebsiteResponse, error_response};

#[tracing::instrument(skip(state, request), fields(url = %request.url))]
pub async fn load_website_handler<W>(
    State(state): State<AppState<W>>,
    Json(request): Json<LoadWebsiteRequest>,
) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    // Fetch and split without holding the session lock; the swap below is
    // the only point where readers can observe the change.
    let store = match state.chat_service.load_website(&request.url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load website");
            return error_response(load_error_status(&e), e.to_string());
        }
    };

    let response = LoadWebsiteResponse {
        url: store.source_url().to_string(),
        chunk_count: store.len(),
        message: LOADED_GREETING.to_string(),
    };

    state.session.write().await.install(store);
    tracing::info!(chunk_count = response.chunk_count, "Website loaded");

    (StatusCode::OK, Json(response)).into_response()
}

fn load_error_status(error: &LoadError) -> StatusCode {
    match error {
        LoadError::MissingUrl | LoadError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        LoadError::Fetch(_) => StatusCode::BAD_GATEWAY,
        LoadError::EmptyContent(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LoadError::Split(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
