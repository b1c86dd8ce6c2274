use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{InferenceClient, MediaExtractor};
use crate::application::services::TaskError;
use crate::domain::TaskId;
use crate::presentation::state::AppState;

use super::responses::ErrorResponse;
use super::session::resolve_session;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete one of the caller's tasks. Tasks of other sessions are
/// indistinguishable from missing ones.
#[tracing::instrument(skip(state, jar))]
pub async fn delete_task_handler<E, I>(
    State(state): State<AppState<E, I>>,
    jar: CookieJar,
    Path(task_id): Path<String>,
) -> impl IntoResponse
where
    E: MediaExtractor + 'static,
    I: InferenceClient + 'static,
{
    let uuid = match Uuid::parse_str(&task_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid task ID: {}", task_id),
                }),
            )
                .into_response();
        }
    };

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

    match state
        .task_service
        .delete(TaskId::from_uuid(uuid), &session_id)
        .await
    {
        Ok(()) => (
            jar,
            (
                StatusCode::OK,
                Json(DeleteResponse {
                    message: "Task deleted successfully".to_string(),
                }),
            ),
        )
            .into_response(),
        Err(TaskError::NotFound) => (
            jar,
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Task not found or not authorized for deletion".to_string(),
                }),
            ),
        )
            .into_response(),
        Err(TaskError::Repository(e)) => {
            tracing::error!(error = %e, "Task deletion failed");
            (
                jar,
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Database error during task deletion: {}", e),
                    }),
                ),
            )
                .into_response()
        }
        Err(e) => (
            jar,
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Unexpected error during task deletion: {}", e),
                }),
            ),
        )
            .into_response(),
    }
}
