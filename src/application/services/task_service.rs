use std::sync::Arc;

use crate::application::ports::{InferenceClient, MediaExtractor, RepositoryError, TaskRepository};
use crate::domain::{SessionId, Task, TaskId};

use super::{PipelineError, PipelineService};

/// Task lifecycle around the pipeline: (session, URL) cache lookups,
/// persistence of completed runs, session-scoped listing and deletion.
pub struct TaskService<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    pipeline: PipelineService<E, I>,
    tasks: Arc<dyn TaskRepository>,
}

impl<E, I> TaskService<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    pub fn new(pipeline: PipelineService<E, I>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { pipeline, tasks }
    }

    /// Return the stored Task for this (session, URL) pair, or run the
    /// pipeline and persist its result. The lookup is exact: two URLs
    /// differing in any byte are distinct keys. Concurrent misses for the
    /// same key may both run the pipeline and both insert; later lookups
    /// settle on the first row the store returns.
    pub async fn transcribe_or_cached(
        &self,
        session_id: &SessionId,
        video_url: &str,
    ) -> Result<Task, TaskError> {
        if let Some(existing) = self
            .tasks
            .find_by_session_and_url(session_id, video_url)
            .await?
        {
            tracing::info!(task_id = %existing.id.as_uuid(), "Returning cached task");
            return Ok(existing);
        }

        // Extraction failure propagates here and nothing is persisted for
        // the run; degraded transcripts/summaries are stored like results.
        let processed = self.pipeline.run(video_url).await?;

        let task = Task::new(
            session_id.clone(),
            video_url.to_string(),
            processed.title,
            processed.audio_path,
            processed.transcription,
            processed.summary,
        );
        self.tasks.insert(&task).await?;

        tracing::info!(task_id = %task.id.as_uuid(), video_url = %video_url, "Task stored");

        Ok(task)
    }

    pub async fn list_for_session(&self, session_id: &SessionId) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.list_by_session(session_id).await?)
    }

    /// Delete a task owned by `session_id`. A task that does not exist or
    /// belongs to another session is the same not-found condition; nothing
    /// leaks about foreign tasks. The audio file is removed best-effort.
    pub async fn delete(&self, id: TaskId, session_id: &SessionId) -> Result<(), TaskError> {
        let Some(task) = self.tasks.find_by_id_and_session(id, session_id).await? else {
            return Err(TaskError::NotFound);
        };

        if let Err(e) = tokio::fs::remove_file(&task.audio_path).await {
            tracing::warn!(
                error = %e,
                path = %task.audio_path.display(),
                "Could not delete audio file"
            );
        }

        self.tasks.delete(task.id).await?;

        tracing::info!(task_id = %id.as_uuid(), "Task deleted");

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("pipeline: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("task not found or not authorized")]
    NotFound,
}
