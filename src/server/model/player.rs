//! Domain models for player data operations.
//!
//! Defines the player domain model and the parameter types for creating and
//! updating players.

use crate::{
    model::player::{CreatePlayerDto, LocationDto, PlayerDto, UpdatePlayerDto},
    server::{
        error::AppError,
        util::validate::{require_min_length, require_non_empty, require_relative_path},
    },
};

/// Minimum accepted description length.
pub const MIN_DESCRIPTION_LENGTH: usize = 5;

/// Latitude/longitude pair resolved from an address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Player profile owned by exactly one academy.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Unique identifier for the player.
    pub id: i32,
    /// ID of the owning academy. Set at creation and never changed.
    pub academy_id: i32,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    /// Path of the player image.
    pub image: String,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            academy_id: entity.academy_id,
            title: entity.title,
            description: entity.description,
            address: entity.address,
            location: Coordinates {
                lat: entity.latitude,
                lng: entity.longitude,
            },
            image: entity.image,
        }
    }

    /// Converts the player domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            title: self.title,
            description: self.description,
            address: self.address,
            location: LocationDto {
                lat: self.location.lat,
                lng: self.location.lng,
            },
            image: self.image,
            creator: self.academy_id,
        }
    }
}

/// Validated player fields supplied by the request handler.
///
/// Carries everything except the owner and the coordinates, which are added by
/// the controller after authentication and geocoding.
#[derive(Debug, Clone)]
pub struct NewPlayerFields {
    pub title: String,
    pub description: String,
    pub address: String,
    pub image: String,
}

impl NewPlayerFields {
    /// Validates a create DTO.
    ///
    /// # Returns
    /// - `Ok(NewPlayerFields)` - Title and address are non-empty, the description has
    ///   at least `MIN_DESCRIPTION_LENGTH` characters and the image is a path relative
    ///   to the upload directory
    /// - `Err(AppError::Validation)` - Any field failed validation
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        require_non_empty("title", &dto.title)?;
        require_min_length("description", &dto.description, MIN_DESCRIPTION_LENGTH)?;
        require_non_empty("address", &dto.address)?;
        require_relative_path("image", &dto.image)?;

        Ok(Self {
            title: dto.title,
            description: dto.description,
            address: dto.address,
            image: dto.image,
        })
    }
}

/// Parameters for creating a new player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParam {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Coordinates,
    pub image: String,
}

impl CreatePlayerParam {
    pub fn new(fields: NewPlayerFields, location: Coordinates) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            address: fields.address,
            location,
            image: fields.image,
        }
    }
}

/// Parameters for updating a player's editable fields.
///
/// Address, coordinates and image are fixed after creation.
#[derive(Debug, Clone)]
pub struct UpdatePlayerParam {
    pub title: String,
    pub description: String,
}

impl UpdatePlayerParam {
    /// Validates an update DTO.
    ///
    /// # Returns
    /// - `Ok(UpdatePlayerParam)` - Title is non-empty and the description has at
    ///   least `MIN_DESCRIPTION_LENGTH` characters
    /// - `Err(AppError::Validation)` - Any field failed validation
    pub fn from_dto(dto: UpdatePlayerDto) -> Result<Self, AppError> {
        require_non_empty("title", &dto.title)?;
        require_min_length("description", &dto.description, MIN_DESCRIPTION_LENGTH)?;

        Ok(Self {
            title: dto.title,
            description: dto.description,
        })
    }
}
