use async_trait::async_trait;

use crate::domain::{SessionId, Task, TaskId};

use super::RepositoryError;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, task: &Task) -> Result<(), RepositoryError>;

    /// Exact-match lookup on the (session, URL) pair. The URL is compared
    /// byte-for-byte as received; no canonicalization. When duplicates
    /// exist the first row the store returns wins.
    async fn find_by_session_and_url(
        &self,
        session_id: &SessionId,
        video_url: &str,
    ) -> Result<Option<Task>, RepositoryError>;

    async fn find_by_id_and_session(
        &self,
        id: TaskId,
        session_id: &SessionId,
    ) -> Result<Option<Task>, RepositoryError>;

    async fn list_by_session(&self, session_id: &SessionId) -> Result<Vec<Task>, RepositoryError>;

    async fn delete(&self, id: TaskId) -> Result<(), RepositoryError>;
}
