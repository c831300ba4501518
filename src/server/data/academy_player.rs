//! Owned-set repository.
//!
//! Each row of `academy_player` records that an academy owns a player. The rows are
//! the academy side of the academy/player relationship; `player.academy_id` is the
//! player side. The player service keeps the two in step inside transactions.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::player::Player;

pub struct AcademyPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademyPlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a player ID to an academy's owned-set.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted
    /// - `Err(DbErr)` - Database error, including a duplicate entry
    pub async fn add(&self, academy_id: i32, player_id: i32) -> Result<(), DbErr> {
        entity::academy_player::ActiveModel {
            academy_id: ActiveValue::Set(academy_id),
            player_id: ActiveValue::Set(player_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a player ID from an academy's owned-set.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 or 1)
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, academy_id: i32, player_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademyPlayer::delete_many()
            .filter(entity::academy_player::Column::AcademyId.eq(academy_id))
            .filter(entity::academy_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the player IDs in an academy's owned-set, ascending.
    pub async fn player_ids_by_academy(&self, academy_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::AcademyPlayer::find()
            .select_only()
            .column(entity::academy_player::Column::PlayerId)
            .filter(entity::academy_player::Column::AcademyId.eq(academy_id))
            .order_by_asc(entity::academy_player::Column::PlayerId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the players in an academy's owned-set, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Players referenced by the owned-set (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_players_by_academy(&self, academy_id: i32) -> Result<Vec<Player>, DbErr> {
        let players = entity::prelude::Player::find()
            .inner_join(entity::prelude::AcademyPlayer)
            .filter(entity::academy_player::Column::AcademyId.eq(academy_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(Player::from_entity).collect())
    }
}
