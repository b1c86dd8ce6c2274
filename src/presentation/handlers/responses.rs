use serde::Serialize;

use crate::domain::Task;

#[derive(Serialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub video_url: String,
    pub video_title: Option<String>,
    pub transcription: String,
    pub summary: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            task_id: task.id.as_uuid().to_string(),
            video_url: task.video_url,
            video_title: task.video_title,
            transcription: task.transcription,
            summary: task.summary,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
