//! Error responses shared by every handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No session cookie on a protected route.
    #[error("Login First")]
    Unauthenticated,

    #[error("Invalid Token")]
    InvalidToken,

    #[error("User already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    UnknownEmail,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequest(String),

    /// The session token is valid but its account is gone.
    #[error("User no longer exists")]
    OrphanedSession,

    #[error("Internal server error")]
    Store(#[source] StoreError),

    /// Unexpected failure reported with the terse generic message.
    #[error("Error")]
    Internal(#[source] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => ApiError::DuplicateEmail,
            other => ApiError::Store(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::DuplicateEmail
            | ApiError::UnknownEmail
            | ApiError::IncorrectPassword
            | ApiError::MissingField(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::OrphanedSession | ApiError::Store(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => error!(error = %e, "store failure"),
            ApiError::Internal(e) => error!(error = %e, "internal failure"),
            _ => {}
        }
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
