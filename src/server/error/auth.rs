use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request to a protected route carried no bearer token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so the response does not reveal which
    /// emails are registered. Results in a 403 Forbidden response.
    #[error("Invalid credentials for email '{0}'")]
    InvalidCredentials(String),

    /// Signup attempted with an email that already belongs to an academy.
    ///
    /// Results in a 422 Unprocessable Entity response.
    #[error("Academy with email '{0}' already exists")]
    EmailTaken(String),

    /// bcrypt failed to hash or verify a password.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to process password: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Signing a new token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to sign token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// The configured token lifetime pushes the expiry past the representable range.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,

    /// The blocking task running bcrypt panicked or was cancelled.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Authentication failed"
/// - `InvalidCredentials` → 403 Forbidden with "Invalid credentials, could not log you in"
/// - `EmailTaken` → 422 Unprocessable Entity with "Academy exists already, please login instead"
/// - Other errors → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication failed.")
            }
            Self::InvalidCredentials(_) => (
                StatusCode::FORBIDDEN,
                "Invalid credentials, could not log you in.",
            ),
            Self::EmailTaken(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Academy exists already, please login instead.",
            ),
            err => {
                tracing::error!("{}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
