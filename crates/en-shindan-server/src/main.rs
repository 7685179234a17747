use anyhow::Context;
use axum::{
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod config;
mod models;
mod routes;

use application::DiagnosisService;
use config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "en_shindan=info,en_shindan_server=info,tower_http=info";

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub diagnosis_service: Arc<DiagnosisService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "En-Shindan API is running - every bond has its season".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::diagnosis::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("🔮 En-Shindan API initializing...");

    let config = ServerConfig::from_env()?;
    tracing::info!("🕰️  Reference clock offset: {}", config.utc_offset);

    let state = AppState {
        diagnosis_service: Arc::new(DiagnosisService::new(config.utc_offset)),
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ En-Shindan API ready on {}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
