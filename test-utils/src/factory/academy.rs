//! Academy factory for creating test academy entities.
//!
//! Academies are inserted with a placeholder password hash. Tests exercising the login
//! flow should sign up through the auth service instead so a real bcrypt hash is stored.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test academies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::academy::AcademyFactory;
///
/// let academy = AcademyFactory::new(&db)
///     .name("Northside FC")
///     .email("north@example.com")
///     .build()
///     .await?;
/// ```
pub struct AcademyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    image: String,
}

impl<'a> AcademyFactory<'a> {
    /// Creates a new AcademyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Academy {id}"`
    /// - email: `"academy{id}@example.com"`
    /// - password: placeholder hash, not verifiable by bcrypt
    /// - image: `"images/academy{id}.png"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AcademyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Academy {}", id),
            email: format!("academy{}@example.com", id),
            password: "not-a-real-hash".to_string(),
            image: format!("images/academy{}.png", id),
        }
    }

    /// Sets the academy name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the academy email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the academy image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builds and inserts the academy entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::academy::Model)` - Created academy entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::academy::Model, DbErr> {
        entity::academy::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an academy with default values.
///
/// Shorthand for `AcademyFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::academy::Model)` - Created academy entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_academy(db: &DatabaseConnection) -> Result<entity::academy::Model, DbErr> {
    AcademyFactory::new(db).build().await
}
