use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::WebsiteLoader;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub website_loaded: bool,
}

pub async fn health_handler<W>(State(state): State<AppState<W>>) -> impl IntoResponse
where
    W: WebsiteLoader + 'static,
{
    let website_loaded = state.session.read().await.is_loaded();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            website_loaded,
        }),
    )
}
