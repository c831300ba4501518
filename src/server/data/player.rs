//! Player data repository for database operations.
//!
//! Single-table operations on `player`. Keeping the owned-set in step with these
//! writes is the responsibility of `PlayerService`.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::player::{CreatePlayerParam, Player, UpdatePlayerParam};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player owned by `academy_id`.
    ///
    /// # Arguments
    /// - `academy_id`: ID of the owning academy
    /// - `param`: Player fields including resolved coordinates
    ///
    /// # Returns
    /// - `Ok(Player)`: The created player
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, academy_id: i32, param: CreatePlayerParam) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            academy_id: ActiveValue::Set(academy_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            address: ActiveValue::Set(param.address),
            latitude: ActiveValue::Set(param.location.lat),
            longitude: ActiveValue::Set(param.location.lng),
            image: ActiveValue::Set(param.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Gets a player by ID
    ///
    /// # Returns
    /// - `Ok(Some(Player))`: Player found
    /// - `Ok(None)`: Player not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Updates a player's title and description.
    ///
    /// # Returns
    /// - `Ok(Player)`: The updated player
    /// - `Err(DbErr::RecordNotFound)`: No player with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, id: i32, param: UpdatePlayerParam) -> Result<Player, DbErr> {
        let player = entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Player {} not found", id)))?;

        let mut active_model: entity::player::ActiveModel = player.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);

        let updated = active_model.update(self.db).await?;

        Ok(Player::from_entity(updated))
    }

    /// Deletes a player by ID
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows deleted (0 if the player did not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
