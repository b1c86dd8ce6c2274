use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ContentPart, GenerationParams, InferenceClient, InferenceError};

use super::prompts::TRANSCRIPTION_PROMPT;

/// Payloads above this many bytes are registered with the backend and
/// referenced by handle; anything at or below it is sent inline. The
/// boundary is strictly greater-than.
pub const INLINE_PAYLOAD_LIMIT_BYTES: u64 = 20_971_520;

/// Media type declared for audio payloads on the wire, for both the
/// inline and the upload path.
pub(crate) const AUDIO_MIME_TYPE: &str = "audio/mp3";

pub const TRANSCRIPTION_UNAVAILABLE_MESSAGE: &str =
    "Transcription service is currently unavailable.";

const TRANSCRIPTION_TEMPERATURE: f32 = 0.1;

pub struct TranscriptionService<I>
where
    I: InferenceClient,
{
    client: Option<Arc<I>>,
}

impl<I> TranscriptionService<I>
where
    I: InferenceClient,
{
    /// `client` is `None` when no inference backend is configured; the
    /// service then degrades to a fixed placeholder instead of calling out.
    pub fn new(client: Option<Arc<I>>) -> Self {
        Self { client }
    }

    /// Transcribe the audio file at `audio_path`. Errors never cross this
    /// boundary: backend and I/O failures come back as descriptive text in
    /// place of a transcript, so the pipeline always completes
    /// structurally.
    pub async fn transcribe(&self, audio_path: &Path) -> String {
        let Some(client) = &self.client else {
            return TRANSCRIPTION_UNAVAILABLE_MESSAGE.to_string();
        };

        match self.request_transcript(client, audio_path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, path = %audio_path.display(), "Transcription failed");
                format!("Transcription failed: {}", e)
            }
        }
    }

    async fn request_transcript(
        &self,
        client: &Arc<I>,
        audio_path: &Path,
    ) -> Result<String, TranscriptionFailure> {
        let file_size = tokio::fs::metadata(audio_path).await?.len();

        let media_part = if file_size > INLINE_PAYLOAD_LIMIT_BYTES {
            tracing::debug!(bytes = file_size, "Audio above inline limit, uploading");
            let handle = client.upload_file(audio_path, AUDIO_MIME_TYPE).await?;
            ContentPart::FileData(handle)
        } else {
            let data = tokio::fs::read(audio_path).await?;
            ContentPart::InlineData {
                mime_type: AUDIO_MIME_TYPE.to_string(),
                data,
            }
        };

        tracing::info!(bytes = file_size, "Transcribing audio");

        // No output cap: transcripts may be arbitrarily long.
        let params = GenerationParams {
            temperature: TRANSCRIPTION_TEMPERATURE,
            max_output_tokens: None,
            system_instruction: None,
        };

        let transcript = client
            .generate(
                vec![
                    ContentPart::Text(TRANSCRIPTION_PROMPT.to_string()),
                    media_part,
                ],
                params,
            )
            .await?;

        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
enum TranscriptionFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Inference(#[from] InferenceError),
}
