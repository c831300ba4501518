use super::*;

/// Tests logging in with the credentials used at signup.
///
/// Expected: Ok with the same academy ID and a verifiable token
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let service = AuthService::new(db, &tokens, TEST_COST);

    let signed_up = service
        .signup(signup_param("owner@example.com", "secret1"))
        .await?;

    let session = service
        .login(login_param(" Owner@Example.com ", "secret1"))
        .await?;

    assert_eq!(session.academy_id, signed_up.academy_id);
    assert_eq!(session.email, "owner@example.com");
    assert_eq!(tokens.verify(&session.token)?.academy_id, signed_up.academy_id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let service = AuthService::new(db, &tokens, TEST_COST);

    service
        .signup(signup_param("owner@example.com", "secret1"))
        .await?;

    let result = service
        .login(login_param("owner@example.com", "wrong-password"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests logging in with an email that was never registered.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let result = AuthService::new(db, &tokens, TEST_COST)
        .login(login_param("nobody@example.com", "secret1"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}
