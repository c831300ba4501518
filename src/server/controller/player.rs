use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{CreatePlayerDto, PlayerListDto, PlayerResponseDto, UpdatePlayerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::player::{CreatePlayerParam, NewPlayerFields, UpdatePlayerParam},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - The player
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{pid}",
    tag = PLAYER_TAG,
    params(
        ("pid" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerResponseDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).get_by_id(player_id).await?;

    Ok((
        StatusCode::OK,
        Json(PlayerResponseDto {
            player: player.into_dto(),
        }),
    ))
}

/// Get the players owned by an academy.
///
/// # Returns
/// - `200 OK` - The academy's players, ordered by ID
/// - `404 Not Found` - Academy unknown or owns no players
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/academy/{uid}",
    tag = PLAYER_TAG,
    params(
        ("uid" = i32, Path, description = "Academy ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved players", body = PlayerListDto),
        (status = 404, description = "No players for this academy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_by_academy(
    State(state): State<AppState>,
    Path(academy_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db)
        .get_by_academy(academy_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlayerListDto {
            players: players.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Create a player owned by the authenticated academy.
///
/// Validates the fields, resolves the address to coordinates, then creates the
/// player and adds it to the academy's owned-set in one transaction.
///
/// # Access Control
/// - Bearer token of the owning academy
///
/// # Returns
/// - `201 Created` - The created player
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The token's academy no longer exists
/// - `422 Unprocessable Entity` - Invalid fields or address not found
/// - `500 Internal Server Error` - Geocoding or transaction failure
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Academy not found", body = ErrorDto),
        (status = 422, description = "Invalid inputs, image outside the upload directory or unknown address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let academy = AuthGuard::new(&state.tokens, &headers).require()?;

    let fields = NewPlayerFields::from_dto(payload)?;
    let location = state.geocoder.coordinates_for_address(&fields.address).await?;

    let player = PlayerService::new(&state.db)
        .create(academy.academy_id, CreatePlayerParam::new(fields, location))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlayerResponseDto {
            player: player.into_dto(),
        }),
    ))
}

/// Update a player's title and description.
///
/// # Access Control
/// - Bearer token of the academy owning the player
///
/// # Returns
/// - `200 OK` - The updated player
/// - `401 Unauthorized` - Missing or invalid token, or not the owner
/// - `404 Not Found` - No player with that ID
/// - `422 Unprocessable Entity` - Invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/players/{pid}",
    tag = PLAYER_TAG,
    params(
        ("pid" = i32, Path, description = "Player ID")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerResponseDto),
        (status = 401, description = "Not allowed to edit this player", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 422, description = "Invalid inputs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<i32>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let academy = AuthGuard::new(&state.tokens, &headers).require()?;

    let param = UpdatePlayerParam::from_dto(payload)?;
    let player = PlayerService::new(&state.db)
        .update(academy.academy_id, player_id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlayerResponseDto {
            player: player.into_dto(),
        }),
    ))
}

/// Delete a player and remove it from its academy's owned-set.
///
/// # Access Control
/// - Bearer token of the academy owning the player
///
/// # Returns
/// - `200 OK` - Player deleted
/// - `401 Unauthorized` - Missing or invalid token, or not the owner
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Transaction failure
#[utoipa::path(
    delete,
    path = "/api/players/{pid}",
    tag = PLAYER_TAG,
    params(
        ("pid" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player", body = MessageDto),
        (status = 401, description = "Not allowed to delete this player", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let academy = AuthGuard::new(&state.tokens, &headers).require()?;

    PlayerService::new(&state.db)
        .delete(academy.academy_id, player_id, &state.images)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Deleted player.".to_string(),
        }),
    ))
}
