use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the player lifecycle operations.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// No player exists with the given ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("Player {0} not found")]
    NotFound(i32),

    /// The academy referenced by the operation does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Academy {0} not found")]
    AcademyNotFound(i32),

    /// The requesting academy does not own the player.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Academy {academy_id} does not own player {player_id}")]
    NotOwner {
        /// ID of the academy that made the request
        academy_id: i32,
        /// ID of the player it tried to modify
        player_id: i32,
    },

    /// The multi-row write could not be committed and was rolled back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Player transaction failed: {0}")]
    TransactionFailed(#[source] sea_orm::DbErr),
}

/// Converts player errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `NotOwner`
/// - 404 Not Found - For `NotFound` and `AcademyNotFound`
/// - 500 Internal Server Error - For `TransactionFailed`
impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Could not find player for the provided id.",
            ),
            Self::AcademyNotFound(_) => (
                StatusCode::NOT_FOUND,
                "Could not find academy for the provided id.",
            ),
            Self::NotOwner { .. } => (
                StatusCode::UNAUTHORIZED,
                "You are not allowed to modify this player.",
            ),
            Self::TransactionFailed(ref err) => {
                tracing::error!("Player transaction failed: {}", err);
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
