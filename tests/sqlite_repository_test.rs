use std::path::PathBuf;

use sqlx::SqlitePool;
use tempfile::TempDir;

use vidscribe::application::ports::{SessionRepository, TaskRepository};
use vidscribe::domain::{SessionId, Task, UserSession};
use vidscribe::infrastructure::persistence::{
    SqliteSessionRepository, SqliteTaskRepository, create_pool, run_migrations,
};

async fn setup_pool(dir: &TempDir) -> SqlitePool {
    let db_path = dir.path().join("test.sqlite");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = create_pool(&url, 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn sample_task(session: &str, url: &str, title: Option<&str>) -> Task {
    Task::new(
        SessionId::new(session),
        url.to_string(),
        title.map(|t| t.to_string()),
        PathBuf::from("/tmp/audio.opus"),
        "the transcript".to_string(),
        "the summary".to_string(),
    )
}

#[tokio::test]
async fn given_inserted_task_when_looked_up_by_session_and_url_then_all_fields_survive() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    let task = sample_task("session-a", "https://example.com/v?x=1", Some("Talk"));
    repo.insert(&task).await.unwrap();

    let found = repo
        .find_by_session_and_url(&SessionId::new("session-a"), "https://example.com/v?x=1")
        .await
        .unwrap()
        .expect("task should be found");

    assert_eq!(found.id, task.id);
    assert_eq!(found.session_id, task.session_id);
    assert_eq!(found.video_url, task.video_url);
    assert_eq!(found.video_title.as_deref(), Some("Talk"));
    assert_eq!(found.audio_path, PathBuf::from("/tmp/audio.opus"));
    assert_eq!(found.transcription, "the transcript");
    assert_eq!(found.summary, "the summary");
}

#[tokio::test]
async fn given_absent_title_when_roundtripped_then_stays_absent() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    let task = sample_task("session-a", "https://example.com/v", None);
    repo.insert(&task).await.unwrap();

    let found = repo
        .find_by_session_and_url(&SessionId::new("session-a"), "https://example.com/v")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.video_title, None);
}

#[tokio::test]
async fn given_url_differing_only_in_query_when_looked_up_then_misses() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    repo.insert(&sample_task("session-a", "https://example.com/v?x=1", None))
        .await
        .unwrap();

    let found = repo
        .find_by_session_and_url(&SessionId::new("session-a"), "https://example.com/v?x=1&y=2")
        .await
        .unwrap();

    assert!(found.is_none(), "URLs are exact-match cache keys");
}

#[tokio::test]
async fn given_task_of_other_session_when_looked_up_by_id_then_misses() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    let task = sample_task("session-a", "https://example.com/v", None);
    repo.insert(&task).await.unwrap();

    let found = repo
        .find_by_id_and_session(task.id, &SessionId::new("session-b"))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_tasks_of_two_sessions_when_listing_then_only_own_session_rows_return() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    repo.insert(&sample_task("session-a", "https://example.com/1", None))
        .await
        .unwrap();
    repo.insert(&sample_task("session-a", "https://example.com/2", None))
        .await
        .unwrap();
    repo.insert(&sample_task("session-b", "https://example.com/3", None))
        .await
        .unwrap();

    let listed = repo
        .list_by_session(&SessionId::new("session-a"))
        .await
        .unwrap();

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|t| t.session_id.as_str() == "session-a"));
}

#[tokio::test]
async fn given_deleted_task_when_looked_up_then_misses() {
    let dir = TempDir::new().unwrap();
    let repo = SqliteTaskRepository::new(setup_pool(&dir).await);

    let task = sample_task("session-a", "https://example.com/v", None);
    repo.insert(&task).await.unwrap();
    repo.delete(task.id).await.unwrap();

    let found = repo
        .find_by_session_and_url(&SessionId::new("session-a"), "https://example.com/v")
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn given_inserted_session_when_found_then_roundtrips() {
    let dir = TempDir::new().unwrap();
    let pool = setup_pool(&dir).await;
    let repo = SqliteSessionRepository::new(pool);

    let session = UserSession::new(SessionId::new("session-a"));
    repo.insert(&session).await.unwrap();

    let found = repo
        .find(&SessionId::new("session-a"))
        .await
        .unwrap()
        .expect("session should be found");

    assert_eq!(found.session_id.as_str(), "session-a");

    let missing = repo.find(&SessionId::new("session-z")).await.unwrap();
    assert!(missing.is_none());
}
