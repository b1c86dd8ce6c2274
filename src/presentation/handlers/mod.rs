mod delete_task;
mod health;
mod responses;
mod session;
mod tasks;
mod transcribe;

pub use delete_task::delete_task_handler;
pub use health::health_handler;
pub use responses::{ErrorResponse, TaskResponse};
pub use session::SESSION_COOKIE;
pub use tasks::list_tasks_handler;
pub use transcribe::{TranscribeRequest, transcribe_handler};
