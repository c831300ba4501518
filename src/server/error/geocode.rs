use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The geocoding provider returned no result for the address.
    ///
    /// This is a client error and is never retried. Results in a 422
    /// Unprocessable Entity response.
    #[error("No location found for address '{0}'")]
    NotFound(String),

    /// The geocoding request could not be sent or its body could not be decoded.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The geocoding provider answered with a status other than OK or ZERO_RESULTS.
    ///
    /// Typically an invalid API key or exhausted quota. Results in a 500 Internal
    /// Server Error response.
    #[error("Geocoding provider returned status {0}")]
    Provider(String),
}

impl IntoResponse for GeocodeError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: "Could not find location for the specified address.".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
