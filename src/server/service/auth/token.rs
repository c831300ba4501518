//! Signed bearer tokens identifying an academy.
//!
//! Tokens are HS256 JWTs whose secret comes from configuration. They carry the academy ID
//! and email and expire after the configured lifetime.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::auth::AuthenticatedAcademy};

/// JWT claims issued to an academy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub academy_id: i32,
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies academy tokens.
///
/// Cheap to clone; the keys are derived once from the secret at startup.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify tokens
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a token for an academy.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::ExpiryOutOfRange)` - Lifetime pushes the expiry past the supported range
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn issue(&self, academy_id: i32, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or(AuthError::ExpiryOutOfRange)?;
        let claims = Claims {
            academy_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenCreation)
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedAcademy)` - Identity carried by a valid token
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> Result<AuthenticatedAcademy, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        Ok(AuthenticatedAcademy {
            academy_id: data.claims.academy_id,
            email: data.claims.email,
        })
    }
}
