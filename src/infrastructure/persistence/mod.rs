mod sqlite_pool;
mod sqlite_session_repository;
mod sqlite_task_repository;

pub use sqlite_pool::{create_pool, run_migrations};
pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_task_repository::SqliteTaskRepository;
