use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vidscribe::application::ports::{
    ContentPart, FileHandle, GenerationParams, InferenceClient, InferenceError,
};
use vidscribe::application::services::{
    INLINE_PAYLOAD_LIMIT_BYTES, SUMMARY_PROMPT, SUMMARY_UNAVAILABLE_MESSAGE, SummarizationService,
    TRANSCRIPTION_PROMPT, TRANSCRIPTION_UNAVAILABLE_MESSAGE, TranscriptionService,
};

/// Records every generate/upload call so tests can assert which calling
/// convention the service picked.
#[derive(Default)]
struct RecordingInferenceClient {
    requests: Mutex<Vec<(Vec<ContentPart>, GenerationParams)>>,
    uploads: AtomicUsize,
}

impl RecordingInferenceClient {
    fn recorded(&self) -> Vec<(Vec<ContentPart>, GenerationParams)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for RecordingInferenceClient {
    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        params: GenerationParams,
    ) -> Result<String, InferenceError> {
        self.requests.lock().unwrap().push((parts, params));
        Ok("generated text".to_string())
    }

    async fn upload_file(
        &self,
        _path: &Path,
        mime_type: &str,
    ) -> Result<FileHandle, InferenceError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        Ok(FileHandle {
            uri: "files/recorded".to_string(),
            mime_type: mime_type.to_string(),
        })
    }
}

struct FailingInferenceClient;

#[async_trait]
impl InferenceClient for FailingInferenceClient {
    async fn generate(
        &self,
        _parts: Vec<ContentPart>,
        _params: GenerationParams,
    ) -> Result<String, InferenceError> {
        Err(InferenceError::ApiRequestFailed(
            "quota exhausted".to_string(),
        ))
    }

    async fn upload_file(
        &self,
        _path: &Path,
        _mime_type: &str,
    ) -> Result<FileHandle, InferenceError> {
        Err(InferenceError::UploadFailed("quota exhausted".to_string()))
    }
}

fn audio_file_of_size(bytes: u64) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), vec![0u8; bytes as usize]).unwrap();
    file
}

#[tokio::test]
async fn given_file_exactly_at_limit_when_transcribing_then_inline_payload_is_used() {
    let client = Arc::new(RecordingInferenceClient::default());
    let service = TranscriptionService::new(Some(Arc::clone(&client)));
    let audio = audio_file_of_size(INLINE_PAYLOAD_LIMIT_BYTES);

    let transcript = service.transcribe(audio.path()).await;

    assert_eq!(transcript, "generated text");
    assert_eq!(client.uploads.load(Ordering::SeqCst), 0);

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    let (parts, params) = &recorded[0];
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], ContentPart::Text(t) if t == TRANSCRIPTION_PROMPT));
    match &parts[1] {
        ContentPart::InlineData { mime_type, data } => {
            assert_eq!(mime_type, "audio/mp3");
            assert_eq!(data.len() as u64, INLINE_PAYLOAD_LIMIT_BYTES);
        }
        other => panic!("expected inline payload, got {:?}", other),
    }
    assert!((params.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(params.max_output_tokens, None);
    assert!(params.system_instruction.is_none());
}

#[tokio::test]
async fn given_file_one_byte_above_limit_when_transcribing_then_upload_reference_is_used() {
    let client = Arc::new(RecordingInferenceClient::default());
    let service = TranscriptionService::new(Some(Arc::clone(&client)));
    let audio = audio_file_of_size(INLINE_PAYLOAD_LIMIT_BYTES + 1);

    let transcript = service.transcribe(audio.path()).await;

    assert_eq!(transcript, "generated text");
    assert_eq!(client.uploads.load(Ordering::SeqCst), 1);

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    let (parts, _) = &recorded[0];
    assert!(matches!(&parts[0], ContentPart::Text(t) if t == TRANSCRIPTION_PROMPT));
    assert!(
        matches!(&parts[1], ContentPart::FileData(handle) if handle.uri == "files/recorded"),
        "payload above the limit must go through the upload path"
    );
}

#[tokio::test]
async fn given_no_client_when_transcribing_then_fixed_unavailable_message() {
    let service: TranscriptionService<RecordingInferenceClient> = TranscriptionService::new(None);
    let audio = audio_file_of_size(16);

    let transcript = service.transcribe(audio.path()).await;

    assert_eq!(transcript, TRANSCRIPTION_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn given_backend_error_when_transcribing_then_failure_is_embedded_as_text() {
    let service = TranscriptionService::new(Some(Arc::new(FailingInferenceClient)));
    let audio = audio_file_of_size(16);

    let transcript = service.transcribe(audio.path()).await;

    assert!(transcript.starts_with("Transcription failed:"));
    assert!(transcript.contains("quota exhausted"));
}

#[tokio::test]
async fn given_unreadable_audio_path_when_transcribing_then_failure_is_embedded_as_text() {
    let service = TranscriptionService::new(Some(Arc::new(RecordingInferenceClient::default())));

    let transcript = service
        .transcribe(Path::new("/nonexistent/audio.opus"))
        .await;

    assert!(transcript.starts_with("Transcription failed:"));
}

#[tokio::test]
async fn given_transcript_when_summarizing_then_summary_generation_params_are_used() {
    let client = Arc::new(RecordingInferenceClient::default());
    let service = SummarizationService::new(Some(Arc::clone(&client)));

    let summary = service.summarize("a transcript to condense").await;

    assert_eq!(summary, "generated text");

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    let (parts, params) = &recorded[0];
    assert_eq!(parts.len(), 1);
    assert!(matches!(&parts[0], ContentPart::Text(t) if t == "a transcript to condense"));
    assert!((params.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(params.max_output_tokens, Some(8191));
    assert_eq!(params.system_instruction.as_deref(), Some(SUMMARY_PROMPT));
}

#[tokio::test]
async fn given_no_client_when_summarizing_then_fixed_unavailable_message() {
    let service: SummarizationService<RecordingInferenceClient> = SummarizationService::new(None);

    let summary = service.summarize("anything").await;

    assert_eq!(summary, SUMMARY_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn given_backend_error_when_summarizing_then_failure_is_embedded_as_text() {
    let service = SummarizationService::new(Some(Arc::new(FailingInferenceClient)));

    let summary = service.summarize("anything").await;

    assert!(summary.starts_with("Summarization failed:"));
    assert!(summary.contains("quota exhausted"));
}
