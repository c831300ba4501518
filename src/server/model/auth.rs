//! Authentication domain models and parameters.

use crate::{
    model::academy::{AuthTokenDto, LoginDto, SignupDto},
    server::{
        error::AppError,
        util::validate::{
            normalize_email, require_min_length, require_non_empty, require_relative_path,
        },
    },
};

/// Minimum accepted plaintext password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validated signup request.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub name: String,
    /// Normalized email address.
    pub email: String,
    /// Plaintext password, hashed by the auth service before storage.
    pub password: String,
    pub image: String,
}

impl SignupParam {
    /// Validates a signup DTO and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(SignupParam)` - Name is present, the image is a relative path, email
    ///   is valid and the password has at least `MIN_PASSWORD_LENGTH` characters
    /// - `Err(AppError::Validation)` - Any field failed validation
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        require_non_empty("name", &dto.name)?;
        require_relative_path("image", &dto.image)?;
        require_min_length("password", &dto.password, MIN_PASSWORD_LENGTH)?;
        let email = normalize_email(&dto.email)?;

        Ok(Self {
            name: dto.name,
            email,
            password: dto.password,
            image: dto.image,
        })
    }
}

/// Login request.
///
/// The email is normalized the same way as on signup but otherwise unchecked; a
/// malformed email simply fails to match any academy.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

/// Result of a successful signup or login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub academy_id: i32,
    pub email: String,
    pub token: String,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthTokenDto {
        AuthTokenDto {
            academy_id: self.academy_id,
            email: self.email,
            token: self.token,
        }
    }
}

/// Identity of the academy making an authenticated request.
///
/// Produced by `AuthGuard` from a verified bearer token and passed to services
/// as a trusted parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedAcademy {
    pub academy_id: i32,
    pub email: String,
}
