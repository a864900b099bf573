use ntex::http::StatusCode;
use ntex::web::{HttpResponse, WebResponseError};
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages, keyed by wire field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    NotFound(String),
    Validation(FieldErrors),
    Conflict(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(fields) => {
                write!(f, "Validation failed for {} field(s)", fields.len())
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl WebResponseError for AppError {
    fn error_response(&self, _: &ntex::web::HttpRequest) -> HttpResponse {
        let (status, body) = match self {
            AppError::Db(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Database error" }),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": msg }),
            ),
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Validation failed", "fields": fields }),
            ),
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                serde_json::json!({ "error": msg }),
            ),
        };
        HttpResponse::build(status).json(&body)
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}
