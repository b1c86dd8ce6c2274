use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool, RepositoryError> {
    let mut retries = 5;
    let mut delay = Duration::from_millis(500);

    loop {
        match SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!("SQLite connection pool established");
                return Ok(pool);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis() as u64,
                    "SQLite connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(RepositoryError::ConnectionFailed(e.to_string()));
            }
        }
    }
}

/// Create the schema when it does not exist yet. Safe to run on every
/// start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_sessions (
            session_id TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transcription_tasks (
            id TEXT PRIMARY KEY,
            session_id TEXT NOT NULL REFERENCES user_sessions (session_id),
            video_url TEXT NOT NULL,
            video_title TEXT,
            audio_path TEXT NOT NULL,
            transcription TEXT NOT NULL,
            summary TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tasks_session_url
        ON transcription_tasks (session_id, video_url)
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    Ok(())
}
