//! Error types
//!
//! `PipelineError` covers the fetch and parse steps; the citas route decides
//! what a failure there means for the client. `ApiError` is everything that
//! reaches the client as a `{success: false, error}` body.

use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failure inside the fetch -> parse -> normalize pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Request never produced a response (DNS, connect, TLS, body read)
    #[error("failed to download spreadsheet: {0}")]
    Network(#[from] reqwest::Error),

    /// The spreadsheet host answered with a non-success status
    #[error("spreadsheet host returned {0}")]
    Status(reqwest::StatusCode),

    /// Bytes could not be read as a workbook
    #[error("failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    #[error("spreadsheet has no worksheets")]
    EmptyWorkbook,

    /// The blocking parse task was cancelled
    #[error("parse worker failed: {0}")]
    Worker(#[from] BlockingError),
}

impl PipelineError {
    /// Short label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Network(_) => "network",
            PipelineError::Status(_) => "status",
            PipelineError::Parse(_) | PipelineError::EmptyWorkbook => "parse",
            PipelineError::Worker(_) => "worker",
        }
    }

    /// Network and parse failures are reported to clients as an empty list;
    /// anything else is a server error.
    pub fn degrades_to_empty(&self) -> bool {
        !matches!(self, PipelineError::Worker(_))
    }
}

/// Errors rendered to the client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was not valid JSON (or not JSON at all)
    #[error("{0}")]
    InvalidBody(#[from] JsonPayloadError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        ApiError::Internal(e.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}
