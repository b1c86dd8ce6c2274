use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use vidscribe::application::ports::SessionRepository;
use vidscribe::application::services::{
    PipelineService, SummarizationService, TaskService, TranscriptionService,
};
use vidscribe::infrastructure::inference::GeminiClient;
use vidscribe::infrastructure::media::YtDlpExtractor;
use vidscribe::infrastructure::observability::{TracingConfig, init_tracing};
use vidscribe::infrastructure::persistence::{
    SqliteSessionRepository, SqliteTaskRepository, create_pool, run_migrations,
};
use vidscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();

    init_tracing(TracingConfig::default());

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    run_migrations(&pool).await?;

    let task_repository = Arc::new(SqliteTaskRepository::new(pool.clone()));
    let session_repository: Arc<dyn SessionRepository> =
        Arc::new(SqliteSessionRepository::new(pool));

    let inference_client = settings.inference.api_key.as_deref().map(|key| {
        Arc::new(GeminiClient::new(
            &settings.inference.base_url,
            key,
            &settings.inference.model,
        ))
    });
    if inference_client.is_none() {
        tracing::warn!("GOOGLE_API_KEY not set; transcription and summarization are degraded");
    }

    let extractor = Arc::new(YtDlpExtractor::new(
        &settings.media.ytdlp_path,
        &settings.media.output_dir,
    )?);

    let pipeline = PipelineService::new(
        extractor,
        TranscriptionService::new(inference_client.clone()),
        SummarizationService::new(inference_client),
    );
    let task_service = Arc::new(TaskService::new(pipeline, task_repository));

    let state = AppState {
        task_service,
        session_repository,
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
