use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, home, translate::TranslateController};
use crate::domain::translation::{LanguageCodeTable, TranslationService};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;
use crate::infrastructure::repositories::{GoogleTtsRepository, HuggingFaceTranslationRepository};

/// Wire providers, service and controller from config and return the router
pub fn build_app(config: &Config) -> Result<Router, Box<dyn std::error::Error>> {
    // One HTTP client shared by both providers
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.outbound_timeout_secs))
        .build()?;
    tracing::info!(
        timeout_secs = config.outbound_timeout_secs,
        translation_api_url = %config.translation_api_url,
        tts_api_url = %config.tts_api_url,
        "Outbound HTTP client initialized"
    );

    let languages = Arc::new(LanguageCodeTable::nllb());
    tracing::info!(languages = languages.len(), "Language code table loaded");

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let translation_repo = Arc::new(HuggingFaceTranslationRepository::new(
        http_client.clone(),
        config.translation_api_url.clone(),
        config.huggingface_api_key.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.tts_api_url.clone(),
    ));

    // 2. Instantiate services
    let translation_service = Arc::new(TranslationService::new(
        translation_repo,
        tts_repo,
        languages,
        config.audio_temp_dir.clone(),
    ));

    // 3. Instantiate controllers
    let translate_controller = Arc::new(TranslateController::new(translation_service));

    Ok(build_router(translate_controller))
}

/// Assemble every route of the service
pub fn build_router(translate_controller: Arc<TranslateController>) -> Router {
    let translate_routes = Router::new()
        .route("/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    Router::new()
        .route("/", get(home::index))
        .route("/test", get(health::status))
        .route("/health", get(health::health))
        .merge(translate_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config)?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
