use super::auth::require_auth;
use super::error::ApiError;
use crate::agent::TravelAgent;
use crate::auth::{ AuthenticatedSubject, TokenService };
use crate::config::TlsPaths;
use crate::models::budget::BudgetRequest;
use crate::models::chat::{ ChatReply, ChatRequest, HealthResponse, LoginResponse };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    extract::{ rejection::JsonRejection, State },
    middleware,
    routing::{ get, post },
    Extension,
    Json,
    Router,
};
use serde_json::Value as JsonValue;
use tower_http::cors::{ Any, CorsLayer };
use log::info;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<TravelAgent>,
    pub tokens: Arc<TokenService>,
    pub demo_subject: Arc<str>,
}

impl AppState {
    pub fn new(agent: TravelAgent, tokens: TokenService, demo_subject: &str) -> Self {
        Self {
            agent: Arc::new(agent),
            tokens: Arc::new(tokens),
            demo_subject: Arc::from(demo_subject),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/budget", post(budget_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/login", post(login_handler))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: SocketAddr,
    tls: Option<TlsPaths>,
    state: AppState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = build_router(state);

    match tls {
        Some(paths) => {
            let _ = rustls::crypto::ring::default_provider().install_default();
            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                &paths.cert_path,
                &paths.key_path
            ).await?;

            info!("VASCO backend running on https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))?;

            info!("VASCO backend running on http://{}", addr);
            axum::serve(listener, app.into_make_service()).await?;
        }
    }

    Ok(())
}

async fn root_handler() -> &'static str {
    "Vasco backend is online and ready."
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_string() })
}

async fn login_handler(State(state): State<AppState>) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.tokens.issue(&state.demo_subject)?;
    info!("Issued demo token for {}", state.demo_subject);
    Ok(Json(LoginResponse { token }))
}

async fn chat_handler(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("Chat request from {}", subject.0);

    let reply = state.agent
        .chat_reply(&request.message, &request.conversation_history)
        .await?;
    Ok(Json(ChatReply { reply }))
}

async fn budget_handler(
    State(state): State<AppState>,
    Extension(subject): Extension<AuthenticatedSubject>,
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<Json<JsonValue>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    info!("Budget request from {}", subject.0);

    let budget = state.agent.estimate_budget(&request).await?;
    Ok(Json(budget))
}
