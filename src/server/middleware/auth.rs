use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthenticatedAcademy,
    service::auth::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Requires a valid bearer token on the request.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedAcademy)` - Identity carried by the token
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn require(&self) -> Result<AuthenticatedAcademy, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(self.tokens.verify(token)?)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix(BEARER_PREFIX)?.trim();

        (!token.is_empty()).then_some(token)
    }
}
