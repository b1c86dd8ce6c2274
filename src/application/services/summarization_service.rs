use std::sync::Arc;

use crate::application::ports::{ContentPart, GenerationParams, InferenceClient};

use super::prompts::SUMMARY_PROMPT;

pub const SUMMARY_UNAVAILABLE_MESSAGE: &str = "Summary service is currently unavailable.";

const SUMMARY_TEMPERATURE: f32 = 0.3;
const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 8191;

pub struct SummarizationService<I>
where
    I: InferenceClient,
{
    client: Option<Arc<I>>,
}

impl<I> SummarizationService<I>
where
    I: InferenceClient,
{
    pub fn new(client: Option<Arc<I>>) -> Self {
        Self { client }
    }

    /// Summarize `text` into structured markdown. Same containment policy
    /// as transcription: the input is passed through as-is (including
    /// failure text produced upstream) and backend errors are returned as
    /// descriptive text, never raised.
    pub async fn summarize(&self, text: &str) -> String {
        let Some(client) = &self.client else {
            return SUMMARY_UNAVAILABLE_MESSAGE.to_string();
        };

        tracing::info!(chars = text.len(), "Summarizing transcript");

        let params = GenerationParams {
            temperature: SUMMARY_TEMPERATURE,
            max_output_tokens: Some(SUMMARY_MAX_OUTPUT_TOKENS),
            system_instruction: Some(SUMMARY_PROMPT.to_string()),
        };

        match client
            .generate(vec![ContentPart::Text(text.to_string())], params)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Summarization failed");
                format!("Summarization failed: {}", e)
            }
        }
    }
}
