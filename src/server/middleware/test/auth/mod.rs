use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::token::TokenService,
};

mod require;

fn token_service() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::hours(1))
}

fn headers_with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
