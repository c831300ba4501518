use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: LocationDto,
    pub image: String,
    /// ID of the owning academy.
    pub creator: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerResponseDto {
    pub player: PlayerDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerListDto {
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePlayerDto {
    pub title: String,
    pub description: String,
    pub address: String,
    /// Path of the already uploaded player image.
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdatePlayerDto {
    pub title: String,
    pub description: String,
}
