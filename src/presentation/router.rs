use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::WebsiteLoader;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, chat_history_handler, clear_chat_handler, health_handler, load_website_handler,
    summary_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<W>(state: AppState<W>) -> Router
where
    W: WebsiteLoader + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<W>))
        .route("/api/v1/website", post(load_website_handler::<W>))
        .route("/api/v1/ask", post(ask_handler::<W>))
        .route("/api/v1/chat", get(chat_history_handler::<W>))
        .route("/api/v1/chat/clear", post(clear_chat_handler::<W>))
        .route("/api/v1/summary", get(summary_handler::<W>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
