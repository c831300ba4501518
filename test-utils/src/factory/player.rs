//! Player factory for creating test player entities.
//!
//! Every player built here is also added to its academy's owned-set so that
//! fixtures satisfy the academy/player consistency invariant.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db, academy.id)
///     .title("Striker")
///     .image("images/striker.png")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    academy_id: i32,
    title: String,
    description: String,
    address: String,
    latitude: f64,
    longitude: f64,
    image: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Player {id}"`
    /// - description: `"Description for player {id}"`
    /// - address: `"{id} Stadium Road"`
    /// - coordinates: `45.188529, 5.724524`
    /// - image: `"images/player{id}.png"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `academy_id` - ID of the owning academy
    ///
    /// # Returns
    /// - `PlayerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, academy_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            academy_id,
            title: format!("Player {}", id),
            description: format!("Description for player {}", id),
            address: format!("{} Stadium Road", id),
            latitude: 45.188529,
            longitude: 5.724524,
            image: format!("images/player{}.png", id),
        }
    }

    /// Sets the player title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the player description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the player address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the player coordinates.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the player image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builds and inserts the player and its owned-set entry.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            academy_id: ActiveValue::Set(self.academy_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::academy_player::ActiveModel {
            academy_id: ActiveValue::Set(self.academy_id),
            player_id: ActiveValue::Set(player.id),
        }
        .insert(self.db)
        .await?;

        Ok(player)
    }
}

/// Creates a player owned by the given academy with default values.
///
/// Shorthand for `PlayerFactory::new(db, academy_id).build().await`.
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(
    db: &DatabaseConnection,
    academy_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, academy_id).build().await
}
