use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::application::ports::{InferenceClient, MediaExtractor};
use crate::application::services::TaskError;
use crate::presentation::state::AppState;

use super::responses::{ErrorResponse, TaskResponse};
use super::session::resolve_session;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    pub video_url: String,
}

/// Transcribe and summarize a video. A prior result for the same
/// (session, URL) pair is returned as-is; otherwise the full pipeline
/// runs and its result is stored before responding.
#[tracing::instrument(skip(state, jar, request))]
pub async fn transcribe_handler<E, I>(
    State(state): State<AppState<E, I>>,
    jar: CookieJar,
    Json(request): Json<TranscribeRequest>,
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

    match state
        .task_service
        .transcribe_or_cached(&session_id, &request.video_url)
        .await
    {
        Ok(task) => (jar, (StatusCode::OK, Json(TaskResponse::from(task)))).into_response(),
        Err(TaskError::Pipeline(e)) => {
            tracing::error!(error = %e, video_url = %request.video_url, "Video processing failed");
            (
                jar,
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Video processing failed: {}", e),
                    }),
                ),
            )
                .into_response()
        }
        Err(TaskError::Repository(e)) => {
            tracing::error!(error = %e, "Failed to persist task");
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
        Err(e @ TaskError::NotFound) => (
            jar,
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ),
        )
            .into_response(),
    }
}
