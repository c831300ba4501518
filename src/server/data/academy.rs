//! Academy data repository for database operations.
//!
//! This module provides the `AcademyRepository` for managing academy records. Academy
//! domain models are returned together with their owned-set of player IDs. Password
//! hashes are only exposed through `find_credentials_by_email`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::academy_player::AcademyPlayerRepository,
    model::academy::{Academy, CreateAcademyParam},
};

/// Repository providing database operations for academy accounts.
pub struct AcademyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademyRepository<'a, C> {
    /// Creates a new AcademyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `AcademyRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new academy with an empty owned-set.
    ///
    /// The email column carries a unique index, so inserting a duplicate email fails
    /// even if a concurrent signup slipped past the service-level existence check.
    ///
    /// # Arguments
    /// - `param` - Academy fields with an already hashed password
    ///
    /// # Returns
    /// - `Ok(Academy)` - The created academy
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateAcademyParam) -> Result<Academy, DbErr> {
        let entity = entity::academy::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            image: ActiveValue::Set(param.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Academy::from_entity(entity, Vec::new()))
    }

    /// Finds an academy by ID together with its owned-set.
    ///
    /// # Returns
    /// - `Ok(Some(Academy))` - Academy found
    /// - `Ok(None)` - No academy with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Academy>, DbErr> {
        let Some(entity) = entity::prelude::Academy::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let players = AcademyPlayerRepository::new(self.db)
            .player_ids_by_academy(entity.id)
            .await?;

        Ok(Some(Academy::from_entity(entity, players)))
    }

    /// Checks whether an academy with the given ID exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Academy exists
    /// - `Ok(false)` - No academy with that ID
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Academy::find()
            .filter(entity::academy::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds an academy by its normalized email.
    ///
    /// # Returns
    /// - `Ok(Some(Academy))` - Academy found
    /// - `Ok(None)` - No academy registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Academy>, DbErr> {
        Ok(self
            .find_credentials_by_email(email)
            .await?
            .map(|(academy, _)| academy))
    }

    /// Finds an academy by email and returns it with its stored password hash.
    ///
    /// Only used by the login flow to verify credentials.
    ///
    /// # Returns
    /// - `Ok(Some((Academy, String)))` - Academy and its bcrypt hash
    /// - `Ok(None)` - No academy registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Academy, String)>, DbErr> {
        let Some(entity) = entity::prelude::Academy::find()
            .filter(entity::academy::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let players = AcademyPlayerRepository::new(self.db)
            .player_ids_by_academy(entity.id)
            .await?;
        let password = entity.password.clone();

        Ok(Some((Academy::from_entity(entity, players), password)))
    }

    /// Gets all academies ordered by ID, each with its owned-set.
    ///
    /// # Returns
    /// - `Ok(Vec<Academy>)` - All academies, without password hashes
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Academy>, DbErr> {
        let academies = entity::prelude::Academy::find()
            .order_by_asc(entity::academy::Column::Id)
            .all(self.db)
            .await?;

        let mut owned: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in entity::prelude::AcademyPlayer::find()
            .order_by_asc(entity::academy_player::Column::PlayerId)
            .all(self.db)
            .await?
        {
            owned
                .entry(membership.academy_id)
                .or_default()
                .push(membership.player_id);
        }

        Ok(academies
            .into_iter()
            .map(|academy| {
                let players = owned.remove(&academy.id).unwrap_or_default();
                Academy::from_entity(academy, players)
            })
            .collect())
    }
}
