//! Academy signup and login.
//!
//! Passwords are hashed and verified with bcrypt on Tokio's blocking pool so the hashing
//! work does not stall the async executor.

pub mod token;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::academy::AcademyRepository,
    error::{auth::AuthError, AppError},
    model::{
        academy::CreateAcademyParam,
        auth::{AuthSession, LoginParam, SignupParam},
    },
    service::auth::token::TokenService,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    password_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `tokens` - Token service used to sign session tokens
    /// - `password_cost` - bcrypt cost factor for new password hashes
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, password_cost: u32) -> Self {
        Self {
            db,
            tokens,
            password_cost,
        }
    }

    /// Registers a new academy and signs a token for it.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created academy ID, email and token
    /// - `Err(AuthError::EmailTaken)` - An academy with this email already exists
    /// - `Err(AppError)` - Hashing, signing or database error
    pub async fn signup(&self, param: SignupParam) -> Result<AuthSession, AppError> {
        let repo = AcademyRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::EmailTaken(param.email).into());
        }

        let password = param.password;
        let cost = self.password_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(AuthError::from)?
            .map_err(AuthError::from)?;

        let academy = repo
            .create(CreateAcademyParam {
                name: param.name,
                email: param.email.clone(),
                password_hash,
                image: param.image,
            })
            .await
            .map_err(|err| Self::map_duplicate_email(err, &param.email))?;

        let token = self.tokens.issue(academy.id, &academy.email)?;

        tracing::info!(academy_id = academy.id, "Academy signed up");

        Ok(AuthSession {
            academy_id: academy.id,
            email: academy.email,
            token,
        })
    }

    /// Verifies an academy's credentials and signs a token for it.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Academy ID, email and token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError)` - Hashing, signing or database error
    pub async fn login(&self, param: LoginParam) -> Result<AuthSession, AppError> {
        let Some((academy, password_hash)) = AcademyRepository::new(self.db)
            .find_credentials_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(param.email).into());
        };

        let password = param.password;
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(AuthError::from)?
            .map_err(AuthError::from)?;

        if !valid {
            return Err(AuthError::InvalidCredentials(param.email).into());
        }

        let token = self.tokens.issue(academy.id, &academy.email)?;

        Ok(AuthSession {
            academy_id: academy.id,
            email: academy.email,
            token,
        })
    }

    /// Reports a unique index violation on email as `EmailTaken`.
    ///
    /// Covers two signups for the same email racing past the existence check.
    fn map_duplicate_email(err: DbErr, email: &str) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AuthError::EmailTaken(email.to_string()).into()
            }
            _ => err.into(),
        }
    }
}
