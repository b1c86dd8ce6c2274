use std::path::PathBuf;

use async_trait::async_trait;

/// Result of a successful audio extraction. The title is whatever the
/// source reports; absent titles are valid, not an error.
#[derive(Debug, Clone)]
pub struct ExtractedMedia {
    pub audio_path: PathBuf,
    pub title: Option<String>,
}

#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Download the best available audio track for `url`, transcode it to
    /// the configured output format and return its path plus the media
    /// title. Any download or transcode failure is fatal to the caller's
    /// pipeline run; no partial audio is usable.
    async fn extract(&self, url: &str) -> Result<ExtractedMedia, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to launch extractor: {0}")]
    SpawnFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("unexpected extractor output: {0}")]
    MalformedOutput(String),
}
