use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::{SessionId, TaskId};

/// One persisted record of a completed or degraded pipeline run for a
/// (session, URL) pair. Degraded runs store the failure text in place of
/// the transcript or summary; only extraction failures produce no Task.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub session_id: SessionId,
    pub video_url: String,
    pub video_title: Option<String>,
    pub audio_path: PathBuf,
    pub transcription: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        session_id: SessionId,
        video_url: String,
        video_title: Option<String>,
        audio_path: PathBuf,
        transcription: String,
        summary: String,
    ) -> Self {
        Self {
            id: TaskId::new(),
            session_id,
            video_url,
            video_title,
            audio_path,
            transcription,
            summary,
            created_at: Utc::now(),
        }
    }
}
