use super::*;

/// Tests a request carrying a valid bearer token.
///
/// Expected: Ok with the academy ID and email from the token
#[test]
fn grants_access_with_valid_token() {
    let tokens = token_service();
    let token = tokens.issue(42, "owner@example.com").unwrap();
    let headers = headers_with_authorization(&format!("Bearer {}", token));

    let academy = AuthGuard::new(&tokens, &headers).require().unwrap();

    assert_eq!(academy.academy_id, 42);
    assert_eq!(academy.email, "owner@example.com");
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_without_header() {
    let tokens = token_service();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests Authorization headers that do not carry a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_with_non_bearer_header() {
    let tokens = token_service();

    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer    "] {
        let headers = headers_with_authorization(value);
        let result = AuthGuard::new(&tokens, &headers).require();

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn denies_access_with_foreign_token() {
    let tokens = token_service();
    let foreign = TokenService::new("other-secret", chrono::Duration::hours(1))
        .issue(42, "owner@example.com")
        .unwrap();
    let headers = headers_with_authorization(&format!("Bearer {}", foreign));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn denies_access_with_expired_token() {
    let tokens = token_service();
    let expired = TokenService::new("test-secret", chrono::Duration::hours(-1))
        .issue(42, "owner@example.com")
        .unwrap();
    let headers = headers_with_authorization(&format!("Bearer {}", expired));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}
