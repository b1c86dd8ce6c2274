use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use crate::application::ports::{RepositoryError, SessionRepository};
use crate::domain::{SessionId, UserSession};

pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    #[instrument(skip(self, session), fields(session_id = %session.session_id))]
    async fn insert(&self, session: &UserSession) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO user_sessions (session_id, created_at) VALUES (?1, ?2)")
            .bind(session.session_id.as_str())
            .bind(session.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(session_id = %session_id))]
    async fn find(&self, session_id: &SessionId) -> Result<Option<UserSession>, RepositoryError> {
        let row = sqlx::query(
            "SELECT session_id, created_at FROM user_sessions WHERE session_id = ?1",
        )
        .bind(session_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => {
                let session_id: String = r
                    .try_get("session_id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let created_at: DateTime<Utc> = r
                    .try_get("created_at")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

                Ok(Some(UserSession {
                    session_id: SessionId::new(session_id),
                    created_at,
                }))
            }
            None => Ok(None),
        }
    }
}
