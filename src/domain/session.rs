use chrono::{DateTime, Utc};

use super::SessionId;

#[derive(Debug, Clone)]
pub struct UserSession {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
}

impl UserSession {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            created_at: Utc::now(),
        }
    }
}
