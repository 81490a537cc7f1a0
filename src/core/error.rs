use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::shared::constants::{AGENT_SERVICE_ERROR, POLL_TIMEOUT_ERROR};

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Agent service error: {0}")]
    AgentService(String),

    #[error("Run polling exceeded {0:?}")]
    PollTimeout(Duration),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body sent to clients. Upstream fault detail is logged on the server
/// and never echoed here.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AgentService(detail) => {
                tracing::error!("Agent service error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    AGENT_SERVICE_ERROR.to_string(),
                )
            }
            AppError::PollTimeout(budget) => {
                tracing::warn!("Agent run did not finish within {:?}", budget);
                (StatusCode::GATEWAY_TIMEOUT, POLL_TIMEOUT_ERROR.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody { error: message });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
