use std::sync::Arc;

use crate::application::ports::{InferenceClient, MediaExtractor, SessionRepository};
use crate::application::services::TaskService;

pub struct AppState<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    pub task_service: Arc<TaskService<E, I>>,
    pub session_repository: Arc<dyn SessionRepository>,
}

impl<E, I> Clone for AppState<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    fn clone(&self) -> Self {
        Self {
            task_service: Arc::clone(&self.task_service),
            session_repository: Arc::clone(&self.session_repository),
        }
    }
}
