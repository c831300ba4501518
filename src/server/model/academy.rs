//! Academy domain models.

use crate::model::academy::AcademyDto;

/// Academy account as seen by the service layer.
///
/// The password hash never leaves the data layer; it is only read by the
/// auth service through `AcademyRepository::find_credentials_by_email`.
#[derive(Debug, Clone, PartialEq)]
pub struct Academy {
    /// Unique identifier for the academy.
    pub id: i32,
    /// Display name of the academy.
    pub name: String,
    /// Normalized, unique email address.
    pub email: String,
    /// Path of the academy image.
    pub image: String,
    /// IDs of the players in the academy's owned-set.
    pub players: Vec<i32>,
}

impl Academy {
    /// Converts an entity model and its owned-set into an academy domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `players` - Player IDs from the academy's owned-set
    ///
    /// # Returns
    /// - `Academy` - The converted domain model, without the password hash
    pub fn from_entity(entity: entity::academy::Model, players: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            image: entity.image,
            players,
        }
    }

    /// Converts the academy domain model to a DTO for API responses.
    pub fn into_dto(self) -> AcademyDto {
        AcademyDto {
            id: self.id,
            name: self.name,
            email: self.email,
            image: self.image,
            players: self.players,
        }
    }
}

/// Parameters for inserting a new academy.
///
/// `password_hash` must already be a bcrypt hash; plaintext never reaches the
/// data layer.
#[derive(Debug, Clone)]
pub struct CreateAcademyParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub image: String,
}
