use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{InferenceClient, MediaExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_task_handler, health_handler, list_tasks_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, I>(state: AppState<E, I>) -> Router
where
    E: MediaExtractor + 'static,
    I: InferenceClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/transcribe", post(transcribe_handler::<E, I>))
        .route("/tasks", get(list_tasks_handler::<E, I>))
        .route("/tasks/{task_id}", delete(delete_task_handler::<E, I>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
