//! Vonix server binary.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vonix::adapters::http::{build_router, SessionHandlers};
use vonix::adapters::{
    HttpAssessmentScorer, HttpScorerConfig, HuggingFaceConfig, HuggingFaceGenerator,
    InMemorySessionRepository,
};
use vonix::application::{
    CreateSessionHandler, DeleteSessionHandler, GetSessionHandler, ProcessMessageHandler,
    SendMessageHandler,
};
use vonix::config::AppConfig;
use vonix::ports::SessionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;

    init_tracing(&config);
    config.validate()?;

    let mut generation = HuggingFaceConfig::new(&config.generation.api_url)
        .with_timeout(config.generation.timeout());
    if let Some(token) = config.generation.api_token.as_deref().filter(|t| !t.is_empty()) {
        generation = generation.with_token(token);
    }
    let generator = Arc::new(HuggingFaceGenerator::new(generation)?);

    let scorer = Arc::new(HttpAssessmentScorer::new(
        HttpScorerConfig::new(&config.scoring.url).with_timeout(config.scoring.timeout()),
    )?);

    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
    let processor = ProcessMessageHandler::new(generator, scorer);

    let handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(repository.clone())),
        Arc::new(GetSessionHandler::new(repository.clone())),
        Arc::new(SendMessageHandler::new(repository.clone(), processor)),
        Arc::new(DeleteSessionHandler::new(repository)),
    );
    let app = build_router(handlers, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %addr,
        environment = ?config.server.environment,
        generation_url = %config.generation.api_url,
        scoring_url = %config.scoring.url,
        "Vonix listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
