use std::{path::PathBuf, str::FromStr};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_TOKEN_TTL_SECONDS: &str = "3600";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Longest accepted token lifetime, one year.
const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Cost range accepted by bcrypt.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Directory that stored image paths are relative to.
    pub upload_dir: PathBuf,

    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    pub password_cost: u32,

    pub geocode_url: Url,
    pub geocode_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            upload_dir: PathBuf::from(
                optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            jwt_secret: required("JWT_SECRET")?,
            token_ttl: token_ttl(parsed_or("TOKEN_TTL_SECONDS", DEFAULT_TOKEN_TTL_SECONDS)?)?,
            password_cost: password_cost(parsed_or(
                "BCRYPT_COST",
                &bcrypt::DEFAULT_COST.to_string(),
            )?)?,
            geocode_url: parsed_or("GEOCODE_URL", DEFAULT_GEOCODE_URL)?,
            geocode_api_key: required("GEOCODE_API_KEY")?,
        })
    }
}

/// Reads a variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = optional(name).unwrap_or_else(|| default.to_string());

    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

/// Converts `TOKEN_TTL_SECONDS` into a lifetime between one second and one year.
fn token_ttl(seconds: i64) -> Result<chrono::Duration, ConfigError> {
    (1..=MAX_TOKEN_TTL_SECONDS)
        .contains(&seconds)
        .then(|| chrono::Duration::try_seconds(seconds))
        .flatten()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TOKEN_TTL_SECONDS".to_string(),
            value: seconds.to_string(),
        })
}

fn password_cost(cost: u32) -> Result<u32, ConfigError> {
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(ConfigError::InvalidEnvVar {
            name: "BCRYPT_COST".to_string(),
            value: cost.to_string(),
        });
    }

    Ok(cost)
}
