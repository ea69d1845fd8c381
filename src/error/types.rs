use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{MAX_FILE_SIZE_BYTES, SUPPORTED_EXTENSIONS};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported format: {extension}, supported: {}", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat { extension: String },

    #[error("File is empty")]
    EmptyFile,

    #[error("File too large, max {limit_mb}MB")]
    FileTooLarge { limit_mb: usize },

    #[error("Error processing file: {message}")]
    ProcessingError { message: String },

    #[error("No text found in file")]
    NoTextFound,

    #[error("Missing file in request")]
    MissingFile,

    #[error("Invalid multipart body: {message}")]
    InvalidMultipart { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AppError::EmptyFile => "EMPTY_FILE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::ProcessingError { .. } => "PROCESSING_ERROR",
            AppError::NoTextFound => "NO_TEXT_FOUND",
            AppError::MissingFile => "MISSING_FILE",
            AppError::InvalidMultipart { .. } => "INVALID_MULTIPART",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat { .. } => StatusCode::BAD_REQUEST,
            AppError::EmptyFile => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
            AppError::ProcessingError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NoTextFound => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MissingFile => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidMultipart { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        // all variants map to 4xx
        tracing::warn!(
            error_code = error_code,
            status_code = %status,
            request_id = %request_id,
            error_message = %message,
            "Request rejected"
        );

        let body = Json(json!({
            "success": false,
            "detail": message,
            "error": {
                "code": error_code,
                "message": message,
                "request_id": request_id,
                "timestamp": timestamp
            }
        }));

        (status, body).into_response()
    }
}

/// Failure reported by a single format extractor.
///
/// The upload handler never exposes these directly; every variant is folded
/// into [`AppError::ProcessingError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{0}")]
    Parse(String),

    #[error("Unsupported encoding (tried {tried})")]
    Encoding { tried: String },

    #[error("Unexpected failure: {0}")]
    Unknown(String),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::ProcessingError {
            message: err.to_string(),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        // the body limit trips while the file field is streamed in
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::FileTooLarge {
                limit_mb: MAX_FILE_SIZE_BYTES / (1024 * 1024),
            };
        }
        AppError::InvalidMultipart {
            message: err.body_text(),
        }
    }
}

impl AppError {
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        AppError::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        AppError::ProcessingError {
            message: message.into(),
        }
    }
}
