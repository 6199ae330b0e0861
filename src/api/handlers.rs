//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use super::responses::{CommandResponse, ErrorResponse, HealthResponse, StatusResponse};
use crate::{error::TimerError, state::AppState};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(e: TimerError) -> ApiError {
    let status = e.status_code();
    if status.is_server_error() {
        error!("Command failed: {}", e);
    }
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle POST /start/:minutes - Start a preset countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(minutes): Path<u32>,
) -> Result<Json<CommandResponse>, ApiError> {
    let view = state.start(minutes).await.map_err(reject)?;
    info!("Start endpoint called - {} minute countdown running", minutes);
    Ok(Json(CommandResponse::running(
        format!("Timer set for {} minutes", minutes),
        view,
    )))
}

/// Handle POST /reset - Stop the countdown
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CommandResponse>, ApiError> {
    let view = state.reset().await.map_err(reject)?;
    info!("Reset endpoint called - countdown stopped");
    Ok(Json(CommandResponse::idle("Timer reset".to_string(), view)))
}

/// Handle GET /status - Return the latest shell view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        view: state.view(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
