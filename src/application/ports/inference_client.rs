use std::path::Path;

use async_trait::async_trait;

/// Opaque reference to a file previously registered with the backend,
/// used instead of inline bytes for large payloads.
#[derive(Debug, Clone)]
pub struct FileHandle {
    pub uri: String,
    pub mime_type: String,
}

/// One element of the ordered content list sent to the backend.
#[derive(Debug, Clone)]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
    FileData(FileHandle),
}

#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
    pub system_instruction: Option<String>,
}

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        params: GenerationParams,
    ) -> Result<String, InferenceError>;

    /// Register a local file with the backend and return a handle usable
    /// as a [`ContentPart::FileData`] in a later generate call.
    async fn upload_file(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<FileHandle, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
