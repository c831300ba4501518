use sea_orm::DatabaseConnection;

use crate::server::{data::academy::AcademyRepository, error::AppError, model::academy::Academy};

pub struct AcademyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all academies with their owned-sets, without password hashes.
    ///
    /// # Returns
    /// - `Ok(Vec<Academy>)`: All registered academies
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Academy>, AppError> {
        let academies = AcademyRepository::new(self.db).get_all().await?;

        Ok(academies)
    }
}
