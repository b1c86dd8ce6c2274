use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;

use crate::application::ports::{InferenceClient, MediaExtractor};
use crate::presentation::state::AppState;

use super::responses::{ErrorResponse, TaskResponse};
use super::session::resolve_session;

/// All stored tasks for the caller's session, oldest first.
#[tracing::instrument(skip(state, jar))]
pub async fn list_tasks_handler<E, I>(
    State(state): State<AppState<E, I>>,
    jar: CookieJar,
) -> impl IntoResponse
where
    E: MediaExtractor + 'static,
    I: InferenceClient + 'static,
{
    let (session_id, jar) = match resolve_session(jar, state.session_repository.as_ref()).await {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!(error = %e, "Failed to resolve session");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state.task_service.list_for_session(&session_id).await {
        Ok(tasks) => {
            let responses: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
            (jar, (StatusCode::OK, Json(responses))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list tasks");
            (
                jar,
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Database error: {}", e),
                    }),
                ),
            )
                .into_response()
        }
    }
}
