use async_trait::async_trait;

use crate::domain::{SessionId, UserSession};

use super::RepositoryError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: &UserSession) -> Result<(), RepositoryError>;

    async fn find(&self, session_id: &SessionId) -> Result<Option<UserSession>, RepositoryError>;
}
