mod pipeline_service;
mod prompts;
mod summarization_service;
mod task_service;
mod transcription_service;

pub use pipeline_service::{PipelineError, PipelineService, ProcessedMedia};
pub use prompts::{SUMMARY_PROMPT, TRANSCRIPTION_PROMPT};
pub use summarization_service::{SUMMARY_UNAVAILABLE_MESSAGE, SummarizationService};
pub use task_service::{TaskError, TaskService};
pub use transcription_service::{
    INLINE_PAYLOAD_LIMIT_BYTES, TRANSCRIPTION_UNAVAILABLE_MESSAGE, TranscriptionService,
};
