use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Logical rejections of an account operation.
///
/// These are part of the normal API contract: they are reported with HTTP 200
/// and `success: false`, the display string being the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Username or password missing or empty.
    #[error("Missing fields")]
    MissingFields,
    /// Signup attempted with a username that is already taken.
    #[error("Username already exists")]
    DuplicateUsername,
    /// Unknown username or password mismatch.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// POST to a path that has no handler.
    #[error("Unknown endpoint")]
    UnknownEndpoint,
}

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was understood but refused.
    #[error(transparent)]
    Rejected(#[from] AccountError),
    /// Persisting the user collection failed.
    #[error("storage failure")]
    Storage(#[from] StorageError),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Logical failure reported inside a successful HTTP exchange.
    #[error("{0}")]
    Rejected(AccountError),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Rejected(reason) => AppError::Rejected(reason),
            ServiceError::Storage(source) => AppError::Internal(source.to_string()),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        AppError::Rejected(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Rejected(_) => StatusCode::OK,
            AppError::Internal(message) => {
                tracing::error!(%message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let payload = Json(ErrorBody {
            success: false,
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_match_the_wire_contract() {
        assert_eq!(AccountError::MissingFields.to_string(), "Missing fields");
        assert_eq!(
            AccountError::DuplicateUsername.to_string(),
            "Username already exists"
        );
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(AccountError::UnknownEndpoint.to_string(), "Unknown endpoint");
    }

    #[test]
    fn rejections_keep_http_ok() {
        let response = AppError::from(AccountError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn storage_failures_become_internal_errors() {
        let err = ServiceError::from(StorageError::unavailable(
            "disk full".into(),
            std::io::Error::other("boom"),
        ));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
