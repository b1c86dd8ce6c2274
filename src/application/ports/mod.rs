mod inference_client;
mod media_extractor;
mod repository_error;
mod session_repository;
mod task_repository;

pub use inference_client::{
    ContentPart, FileHandle, GenerationParams, InferenceClient, InferenceError,
};
pub use media_extractor::{ExtractedMedia, ExtractionError, MediaExtractor};
pub use repository_error::RepositoryError;
pub use session_repository::SessionRepository;
pub use task_repository::TaskRepository;
