use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ExtractionError, InferenceClient, MediaExtractor};

use super::{SummarizationService, TranscriptionService};

/// Output of a structurally complete pipeline run. Degraded runs carry
/// failure text in `transcription` and/or `summary` and are still
/// persisted by the caller.
#[derive(Debug, Clone)]
pub struct ProcessedMedia {
    pub title: Option<String>,
    pub audio_path: PathBuf,
    pub transcription: String,
    pub summary: String,
}

pub struct PipelineService<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    extractor: Arc<E>,
    transcription: TranscriptionService<I>,
    summarization: SummarizationService<I>,
}

impl<E, I> PipelineService<E, I>
where
    E: MediaExtractor,
    I: InferenceClient,
{
    pub fn new(
        extractor: Arc<E>,
        transcription: TranscriptionService<I>,
        summarization: SummarizationService<I>,
    ) -> Self {
        Self {
            extractor,
            transcription,
            summarization,
        }
    }

    /// Run extract → transcribe → summarize for `url`, each stage feeding
    /// the next. Extraction failure aborts the run; the later stages
    /// contain their own failures, so everything past extraction is
    /// success-shaped. No retries at this layer.
    pub async fn run(&self, url: &str) -> Result<ProcessedMedia, PipelineError> {
        let media = self.extractor.extract(url).await?;

        tracing::info!(
            title = media.title.as_deref().unwrap_or(""),
            path = %media.audio_path.display(),
            "Audio extracted"
        );

        let transcription = self.transcription.transcribe(&media.audio_path).await;
        let summary = self.summarization.summarize(&transcription).await;

        Ok(ProcessedMedia {
            title: media.title,
            audio_path: media.audio_path,
            transcription,
            summary,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
}
