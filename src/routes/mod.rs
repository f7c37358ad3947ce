// Route exports
pub mod config;
pub mod sessions;

use crate::core::ConfigResolver;
use crate::models::ErrorResponse;
use crate::services::{SessionError, SessionStore};
use actix_web::{error, http::StatusCode, web, HttpResponse, ResponseError};
use std::sync::Arc;
use thiserror::Error;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ConfigResolver>,
    pub sessions: Arc<SessionStore>,
}

/// Errors returned by handlers, rendered as [`ErrorResponse`] JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{message}")]
    Conflict { error: &'static str, message: String },

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn conflict(error: &'static str, message: impl Into<String>) -> Self {
        ApiError::Conflict {
            error,
            message: message.into(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Session(SessionError::NotFound(_)) => "session_not_found",
            ApiError::Validation(_) => "validation_failed",
            ApiError::Conflict { error, .. } => *error,
            ApiError::BadRequest(_) => "bad_request",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Turn malformed JSON bodies into the standard error shape
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Turn malformed query strings into the standard error shape
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query: {}", err)).into()
}

/// Turn malformed path segments (e.g. a bad session id) into the standard error shape
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid path: {}", err)).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(config::configure)
            .configure(sessions::configure),
    );
}
