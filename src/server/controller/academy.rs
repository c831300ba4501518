use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        academy::{AcademyListDto, AuthTokenDto, LoginDto, SignupDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::auth::{LoginParam, SignupParam},
        service::{academy::AcademyService, auth::AuthService},
        state::AppState,
    },
};

/// Tag for grouping academy endpoints in OpenAPI documentation
pub static ACADEMY_TAG: &str = "academy";

/// List all academies.
///
/// Returns every registered academy with the IDs of the players it owns.
/// Password hashes are never included.
///
/// # Returns
/// - `200 OK` - All academies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/academies",
    tag = ACADEMY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved academies", body = AcademyListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_academies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let academies = AcademyService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(AcademyListDto {
            academies: academies.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Register a new academy.
///
/// Validates the signup fields, stores the academy with a bcrypt password hash
/// and returns a bearer token for it.
///
/// # Returns
/// - `201 Created` - Academy created, token issued
/// - `422 Unprocessable Entity` - Invalid fields or email already registered
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/api/academies/signup",
    tag = ACADEMY_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Successfully signed up", body = AuthTokenDto),
        (status = 422, description = "Invalid inputs or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SignupParam::from_dto(payload)?;

    let session = AuthService::new(&state.db, &state.tokens, state.password_cost)
        .signup(param)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in as an academy.
///
/// # Returns
/// - `200 OK` - Credentials accepted, token issued
/// - `403 Forbidden` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/api/academies/login",
    tag = ACADEMY_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AuthTokenDto),
        (status = 403, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload);

    let session = AuthService::new(&state.db, &state.tokens, state.password_cost)
        .login(param)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
