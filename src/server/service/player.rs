//! Player lifecycle service.
//!
//! A player and its academy are linked from both sides: `player.academy_id` names the
//! owner and the owner's owned-set (`academy_player`) lists the player. Creating and
//! deleting a player writes both sides inside a single database transaction so that
//! readers either see both facts or neither. If any step fails the transaction is dropped
//! without committing, which rolls it back.
//!
//! Image files are removed only after a delete has committed, on a detached task whose
//! failure is logged and otherwise ignored. Removal is confined to the upload directory
//! by `ImageStore`.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        academy::AcademyRepository, academy_player::AcademyPlayerRepository,
        player::PlayerRepository,
    },
    error::{player::PlayerError, AppError},
    model::player::{CreatePlayerParam, Player, UpdatePlayerParam},
    service::image::ImageStore,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player and adds it to its academy's owned-set atomically.
    ///
    /// The owning academy is looked up inside the transaction rather than trusted from
    /// the caller. Field validation is expected to have happened at the handler boundary.
    ///
    /// # Arguments
    /// - `academy_id`: ID of the authenticated academy that will own the player
    /// - `param`: Validated player fields with resolved coordinates
    ///
    /// # Returns
    /// - `Ok(Player)`: The created player, already present in the owned-set
    /// - `Err(PlayerError::AcademyNotFound)`: No academy with `academy_id`
    /// - `Err(PlayerError::TransactionFailed)`: A write or the commit failed; nothing
    ///   was persisted
    pub async fn create(
        &self,
        academy_id: i32,
        param: CreatePlayerParam,
    ) -> Result<Player, AppError> {
        let txn = self.db.begin().await.map_err(PlayerError::TransactionFailed)?;

        let academy_exists = AcademyRepository::new(&txn)
            .exists(academy_id)
            .await
            .map_err(PlayerError::TransactionFailed)?;
        if !academy_exists {
            return Err(PlayerError::AcademyNotFound(academy_id).into());
        }

        let player = PlayerRepository::new(&txn)
            .create(academy_id, param)
            .await
            .map_err(PlayerError::TransactionFailed)?;

        AcademyPlayerRepository::new(&txn)
            .add(academy_id, player.id)
            .await
            .map_err(PlayerError::TransactionFailed)?;

        txn.commit().await.map_err(PlayerError::TransactionFailed)?;

        tracing::info!(
            academy_id = academy_id,
            player_id = player.id,
            "Created player"
        );

        Ok(player)
    }

    /// Gets a player by ID.
    ///
    /// # Returns
    /// - `Ok(Player)`: The player
    /// - `Err(PlayerError::NotFound)`: No player with that ID
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_by_id(&self, player_id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| PlayerError::NotFound(player_id).into())
    }

    /// Gets the players in an academy's owned-set.
    ///
    /// An unknown academy and an academy without players are reported the same way.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)`: At least one player, ordered by ID
    /// - `Err(AppError::NotFound)`: Academy unknown or owns no players
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_by_academy(&self, academy_id: i32) -> Result<Vec<Player>, AppError> {
        let players = AcademyPlayerRepository::new(self.db)
            .get_players_by_academy(academy_id)
            .await?;

        if players.is_empty() {
            return Err(AppError::NotFound(
                "Could not find players for the provided academy id.".to_string(),
            ));
        }

        Ok(players)
    }

    /// Updates the title and description of a player owned by `academy_id`.
    ///
    /// Only one row changes, so no transaction is used. Address, coordinates and image
    /// cannot be changed after creation.
    ///
    /// # Returns
    /// - `Ok(Player)`: The updated player
    /// - `Err(PlayerError::NotFound)`: No player with that ID
    /// - `Err(PlayerError::NotOwner)`: The player belongs to another academy
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update(
        &self,
        academy_id: i32,
        player_id: i32,
        param: UpdatePlayerParam,
    ) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo
            .find_by_id(player_id)
            .await?
            .ok_or(PlayerError::NotFound(player_id))?;
        Self::ensure_owner(academy_id, &player)?;

        match repo.update(player_id, param).await {
            Ok(player) => Ok(player),
            // Deleted between the ownership check and the write.
            Err(DbErr::RecordNotFound(_)) => Err(PlayerError::NotFound(player_id).into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a player owned by `academy_id` and removes it from the owned-set atomically.
    ///
    /// After the transaction commits, the player's image file is deleted on a detached
    /// task. A failure to delete the file, or an image path outside the upload directory,
    /// is logged and does not affect the result.
    ///
    /// # Arguments
    /// - `academy_id`: ID of the authenticated academy
    /// - `player_id`: ID of the player to delete
    /// - `images`: Store owning the upload directory
    ///
    /// # Returns
    /// - `Ok(())`: Player and owned-set entry removed
    /// - `Err(PlayerError::NotFound)`: No player with that ID
    /// - `Err(PlayerError::NotOwner)`: The player belongs to another academy
    /// - `Err(PlayerError::TransactionFailed)`: The removal could not be committed;
    ///   both rows are unchanged
    pub async fn delete(
        &self,
        academy_id: i32,
        player_id: i32,
        images: &ImageStore,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(PlayerError::TransactionFailed)?;

        let player = PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await
            .map_err(PlayerError::TransactionFailed)?
            .ok_or(PlayerError::NotFound(player_id))?;
        Self::ensure_owner(academy_id, &player)?;

        AcademyPlayerRepository::new(&txn)
            .remove(player.academy_id, player.id)
            .await
            .map_err(PlayerError::TransactionFailed)?;

        PlayerRepository::new(&txn)
            .delete(player.id)
            .await
            .map_err(PlayerError::TransactionFailed)?;

        txn.commit().await.map_err(PlayerError::TransactionFailed)?;

        tracing::info!(
            academy_id = academy_id,
            player_id = player.id,
            "Deleted player"
        );

        images.remove_in_background(player.image);

        Ok(())
    }

    fn ensure_owner(academy_id: i32, player: &Player) -> Result<(), PlayerError> {
        if player.academy_id != academy_id {
            return Err(PlayerError::NotOwner {
                academy_id,
                player_id: player.id,
            });
        }

        Ok(())
    }
}
