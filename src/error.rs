//! Error types shared by the engine, the UI context and the control API

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("countdown duration must be positive, got {0} minutes")]
    InvalidDuration(u32),

    #[error("{0} minutes is not one of the timer presets")]
    UnsupportedPreset(u32),

    #[error("a countdown is already running")]
    AlreadyRunning,

    #[error("failed to lock countdown state: {0}")]
    StateLock(String),

    #[error("UI context is no longer running")]
    UiUnavailable,
}

impl TimerError {
    /// HTTP status reported to control API clients
    pub fn status_code(&self) -> StatusCode {
        match self {
            TimerError::InvalidDuration(_) | TimerError::UnsupportedPreset(_) => {
                StatusCode::BAD_REQUEST
            }
            TimerError::AlreadyRunning => StatusCode::CONFLICT,
            TimerError::StateLock(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimerError::UiUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;
