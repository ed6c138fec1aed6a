use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::validator::ScheduleError;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found. Please check your URL.";

#[derive(Debug, Error)]
pub enum AppError {
    /// Date or time that does not parse.
    #[error("{0}")]
    Format(String),
    /// Business-rule violation or missing field.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Authentication(String),
    /// Storage failure on a write. Only `message` reaches the client.
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to hash password")]
    Hashing(#[from] bcrypt::BcryptError),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn persistence(message: &'static str, source: sqlx::Error) -> Self {
        Self::Persistence { message, source }
    }

    /// Message safe to show to a client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Hashing(_) => "An internal error occurred.".to_string(),
            other => other.to_string(),
        }
    }

    /// Server-side failures carry a cause that is logged but never sent.
    pub fn log_internal(&self) {
        match self {
            Self::Persistence { message, source } => error!("{}: {}", message, source),
            Self::Hashing(source) => error!("Failed to hash password: {}", source),
            _ => {}
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(value: ScheduleError) -> Self {
        match value {
            ScheduleError::InvalidFormat => Self::Format(value.to_string()),
            _ => Self::Validation(value.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Format(_) | Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence { .. } | Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log_internal();
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}
