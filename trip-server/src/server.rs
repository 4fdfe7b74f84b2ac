use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use trip_model::{Llm, MockLlm, OpenAIClient, OpenAIConfig};
use trip_rag::{GuideRetriever, LocalGuideRetriever};

use crate::{
    config::ServerConfig,
    error::ApiError,
    planner::TripPlanner,
    protocol::{TripRequest, TripResponse},
};

pub const SERVICE_NAME: &str = "ai-trip-planner";

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
    pub frontend_path: PathBuf,
}

impl AppState {
    pub fn new(planner: TripPlanner, frontend_path: impl Into<PathBuf>) -> Self {
        Self { planner: Arc::new(planner), frontend_path: frontend_path.into() }
    }
}

/// Wire the model and retriever described by `config` into a planner.
///
/// Test mode uses [`MockLlm`]; otherwise an OpenAI-compatible client is
/// created and an API key is required. The guide file is loaded once here,
/// and a missing or broken file leaves retrieval empty.
pub fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let llm: Arc<dyn Llm> = if config.test_mode {
        info!("TEST_MODE enabled, using mock model");
        Arc::new(MockLlm::new("test-mode"))
    } else {
        let Some(settings) = &config.model else {
            bail!("OPENAI_API_KEY must be set unless TEST_MODE is enabled");
        };
        let openai_config = match &settings.base_url {
            Some(base_url) => {
                OpenAIConfig::compatible(&settings.api_key, base_url, &settings.model)
            }
            None => OpenAIConfig::new(&settings.api_key, &settings.model),
        };
        Arc::new(OpenAIClient::new(openai_config).context("failed to create model client")?)
    };

    let mut planner = TripPlanner::new(llm).with_retrieval_config(config.retrieval.clone());
    if config.enable_rag {
        let retriever = LocalGuideRetriever::from_path(&config.guides_path);
        if retriever.is_empty() {
            warn!(path = %config.guides_path.display(), "RAG enabled but no local guides loaded");
        }
        planner = planner.with_retriever(Arc::new(retriever));
    }

    info!(model = planner.model_name(), rag = config.enable_rag, "planner ready");
    Ok(AppState::new(planner, &config.frontend_path))
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/plan-trip", post(plan_trip))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured host and port. Host names such as `localhost` are resolved.
pub async fn bind_listener(config: &ServerConfig) -> anyhow::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let listener = bind_listener(&config).await?;
    let addr = listener.local_addr()?;
    info!("{} listening on http://{}", SERVICE_NAME, addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.frontend_path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(path = %state.frontend_path.display(), error = %e, "frontend not found");
            Json(json!({"message": "AI Trip Planner API. POST /plan-trip to plan a trip."}))
                .into_response()
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy", "service": SERVICE_NAME}))
}

async fn plan_trip(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.planner.plan(&request).await?;
    Ok(Json(response))
}
