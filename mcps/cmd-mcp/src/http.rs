//! HTTP transport
//!
//! A single `POST /` endpoint taking `{"type": "execute" | "cd", "command": ...}`.
//! Validation failures answer 400 and execution failures 500, both with an
//! `{error, kind}` body. CORS is open to any origin.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::CommandEngine;
use crate::types::{CmdError, CmdResult, CommandResult, ErrorKind};

pub type SharedEngine = Arc<RwLock<CommandEngine>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Execute,
    Cd,
}

/// Request body. For `cd`, `command` holds the target path.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub command: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<CmdError> for ErrorResponse {
    fn from(err: CmdError) -> Self {
        Self {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}

fn api_error(err: CmdError) -> ApiError {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Execution | ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err.into()))
}

/// Build the router around a shared engine
pub fn router(engine: SharedEngine) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", post(handle_request))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(engine: CommandEngine, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Cmd MCP HTTP server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(RwLock::new(engine)))).await?;
    Ok(())
}

async fn handle_request(
    State(engine): State<SharedEngine>,
    Json(req): Json<CommandRequest>,
) -> Result<Json<CommandResult>, ApiError> {
    let result = match req.request_type {
        RequestType::Execute => engine.read().await.execute(&req.command).await,
        RequestType::Cd => change_directory(&engine, &req.command).await,
    };

    result.map(Json).map_err(|e| {
        tracing::error!(request = ?req.request_type, command = %req.command, "{}", e);
        api_error(e)
    })
}

async fn change_directory(engine: &SharedEngine, target: &str) -> CmdResult<CommandResult> {
    let mut engine = engine.write().await;
    let dir = engine.change_directory(target)?;
    let stdout = format!("Changed directory to {}", dir.display());

    Ok(CommandResult {
        stdout,
        stderr: String::new(),
        status: 0,
    })
}
