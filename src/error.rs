/// Error types for aperture-api
///
/// Every failure path funnels into `AppError`, which maps onto the JSON
/// error body returned to API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for aperture-api operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Field-level validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// A related entity referenced by the request does not exist
    #[error("Reference error: {0}")]
    Reference(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate key (uniqueness constraint rejected the write)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Reference(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        HttpResponse::build(status).json(serde_json::json!({
            "error": error_msg,
            "status": status.as_u16(),
        }))
    }
}

/// Classify database failures by constraint kind so that duplicate keys
/// surface as conflicts and broken references as client errors.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().unwrap_or("").to_string();
                match db_err.kind() {
                    sqlx::error::ErrorKind::UniqueViolation => {
                        AppError::Conflict(format!("duplicate key: {}", constraint))
                    }
                    sqlx::error::ErrorKind::ForeignKeyViolation => {
                        AppError::Reference(format!("missing referenced row: {}", constraint))
                    }
                    sqlx::error::ErrorKind::CheckViolation => {
                        AppError::Validation(format!("constraint violated: {}", constraint))
                    }
                    _ => AppError::Database(db_err.message().to_string()),
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
