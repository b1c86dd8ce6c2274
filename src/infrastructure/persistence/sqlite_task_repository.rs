use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, TaskRepository};
use crate::domain::{SessionId, Task, TaskId};

pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: impl ToString) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn task_from_row(row: &SqliteRow) -> Result<Task, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_failed)?;
    let session_id: String = row.try_get("session_id").map_err(query_failed)?;
    let video_url: String = row.try_get("video_url").map_err(query_failed)?;
    let video_title: Option<String> = row.try_get("video_title").map_err(query_failed)?;
    let audio_path: String = row.try_get("audio_path").map_err(query_failed)?;
    let transcription: String = row.try_get("transcription").map_err(query_failed)?;
    let summary: String = row.try_get("summary").map_err(query_failed)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(query_failed)?;

    let uuid = Uuid::parse_str(&id).map_err(query_failed)?;

    Ok(Task {
        id: TaskId::from_uuid(uuid),
        session_id: SessionId::new(session_id),
        video_url,
        video_title,
        audio_path: PathBuf::from(audio_path),
        transcription,
        summary,
        created_at,
    })
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    #[instrument(skip(self, task), fields(task_id = %task.id.as_uuid()))]
    async fn insert(&self, task: &Task) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO transcription_tasks
                (id, session_id, video_url, video_title, audio_path, transcription, summary, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(task.id.as_uuid().to_string())
        .bind(task.session_id.as_str())
        .bind(&task.video_url)
        .bind(&task.video_title)
        .bind(task.audio_path.to_string_lossy().into_owned())
        .bind(&task.transcription)
        .bind(&task.summary)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn find_by_session_and_url(
        &self,
        session_id: &SessionId,
        video_url: &str,
    ) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, video_url, video_title, audio_path, transcription, summary, created_at
            FROM transcription_tasks
            WHERE session_id = ?1 AND video_url = ?2
            LIMIT 1
            "#,
        )
        .bind(session_id.as_str())
        .bind(video_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(task_from_row).transpose()
    }

    #[instrument(skip(self), fields(task_id = %id.as_uuid(), session_id = %session_id))]
    async fn find_by_id_and_session(
        &self,
        id: TaskId,
        session_id: &SessionId,
    ) -> Result<Option<Task>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, video_url, video_title, audio_path, transcription, summary, created_at
            FROM transcription_tasks
            WHERE id = ?1 AND session_id = ?2
            "#,
        )
        .bind(id.as_uuid().to_string())
        .bind(session_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(task_from_row).transpose()
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn list_by_session(&self, session_id: &SessionId) -> Result<Vec<Task>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, video_url, video_title, audio_path, transcription, summary, created_at
            FROM transcription_tasks
            WHERE session_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(session_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(task_from_row).collect()
    }

    #[instrument(skip(self), fields(task_id = %id.as_uuid()))]
    async fn delete(&self, id: TaskId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM transcription_tasks WHERE id = ?1")
            .bind(id.as_uuid().to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
