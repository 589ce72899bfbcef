use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use goooals_core::models::email::MessageBody;
use goooals_mail::error::MailError;
use goooals_sources::error::SourceError;

/// Unified API error type for all route handlers.
///
/// Every variant renders as `{ "message": ... }`; internal details are
/// logged, and only surfaced in the body for email failures.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Upstream(String),
    Internal(String),
    Email(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, MessageBody::new(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, MessageBody::new(msg)),
            ApiError::Upstream(msg) => {
                tracing::error!("upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    MessageBody::new("Failed to fetch external goal"),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageBody::new("Internal Server Error"),
                )
            }
            ApiError::Email(msg) => {
                tracing::error!("error sending email: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageBody {
                        message: "Failed to send email".to_string(),
                        error: Some(msg),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<SourceError> for ApiError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::EmptyCatalog => ApiError::NotFound(e.to_string()),
            SourceError::CatalogRead { .. } | SourceError::CatalogParse(_) => {
                ApiError::Internal(e.to_string())
            }
            SourceError::Upstream(_) | SourceError::UpstreamStatus { .. } => {
                ApiError::Upstream(e.to_string())
            }
        }
    }
}

impl From<MailError> for ApiError {
    fn from(e: MailError) -> Self {
        ApiError::Email(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
