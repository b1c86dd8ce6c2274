use std::path::Path;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::{
    ContentPart, FileHandle, GenerationParams, InferenceClient, InferenceError,
};

/// Client for the Gemini generative-language REST API. Small payloads ride
/// inside the request as base64 `inline_data` parts; large ones are
/// registered through the media upload endpoint and referenced as
/// `file_data`. The base URL is injectable so tests can point the client
/// at a local mock server.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn encode_part(part: ContentPart) -> Value {
        match part {
            ContentPart::Text(text) => json!({ "text": text }),
            ContentPart::InlineData { mime_type, data } => json!({
                "inline_data": {
                    "mime_type": mime_type,
                    "data": general_purpose::STANDARD.encode(data),
                }
            }),
            ContentPart::FileData(handle) => json!({
                "file_data": {
                    "file_uri": handle.uri,
                    "mime_type": handle.mime_type,
                }
            }),
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    file: UploadedFile,
}

#[derive(Deserialize)]
struct UploadedFile {
    uri: String,
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        params: GenerationParams,
    ) -> Result<String, InferenceError> {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let mut generation_config = json!({ "temperature": params.temperature });
        if let Some(max_tokens) = params.max_output_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }

        let mut body = json!({
            "contents": [{
                "parts": parts.into_iter().map(Self::encode_part).collect::<Vec<_>>(),
            }],
            "generationConfig": generation_config,
        });
        if let Some(instruction) = params.system_instruction {
            body["system_instruction"] = json!({ "parts": [{ "text": instruction }] });
        }

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(InferenceError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("parse response: {}", e)))?;

        let candidate = result
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("no candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();

        tracing::info!(chars = text.len(), "Generation completed");

        Ok(text)
    }

    async fn upload_file(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<FileHandle, InferenceError> {
        let endpoint = format!("{}/upload/v1beta/files?key={}", self.base_url, self.api_key);

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("read {}: {}", path.display(), e)))?;

        tracing::debug!(bytes = data.len(), "Uploading media file");

        let response = self
            .client
            .post(&endpoint)
            .header("X-Goog-Upload-Protocol", "raw")
            .header(reqwest::header::CONTENT_TYPE, mime_type)
            .body(data)
            .send()
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(InferenceError::UploadFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: UploadResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("parse upload response: {}", e)))?;

        Ok(FileHandle {
            uri: result.file.uri,
            mime_type: mime_type.to_string(),
        })
    }
}
