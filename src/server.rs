use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Json, Path as UrlPath, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::directory::{Catalog, DirectoryError};
use crate::store::ActivityStore;

/// Where `GET /` sends browsers
pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }
}

/// Request failures rendered as `{"detail": "..."}` bodies.
pub enum ApiError {
    Directory(DirectoryError),
    /// Malformed or missing query parameters
    BadQuery(QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Directory(e @ DirectoryError::NotFound) => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::Directory(e @ (DirectoryError::AlreadySignedUp | DirectoryError::AtCapacity)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Directory(DirectoryError::Storage(e)) => {
                error!("Activity store failure: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            ApiError::BadQuery(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadQuery(rejection)
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SignupResponse {
    pub message: String,
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "OK" }))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: &AppConfig, store: Arc<dyn ActivityStore>) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = router(AppState::new(store), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Activity directory listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, LANDING_PAGE)])
}

async fn list_activities(State(state): State<AppState>) -> Result<Json<Catalog>, ApiError> {
    Ok(Json(state.store.list().await?))
}

#[tracing::instrument(skip(state, query))]
async fn signup_for_activity(
    State(state): State<AppState>,
    UrlPath(activity_name): UrlPath<String>,
    query: Result<Query<SignupParams>, QueryRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Query(params) = query?;
    match state.store.signup(&activity_name, &params.email).await {
        Ok(()) => {
            info!("Signed up {} for {}", params.email, activity_name);
            Ok(Json(SignupResponse {
                message: format!("Signed up {} for {}", params.email, activity_name),
            }))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!("Signup rejected: {}", e);
            }
            Err(e.into())
        }
    }
}
