use super::*;

/// Tests signing up a new academy.
///
/// Verifies that the stored password is a bcrypt hash of the plaintext and that
/// the returned token identifies the new academy.
///
/// Expected: Ok with a verifiable token
#[tokio::test]
async fn creates_academy_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let session = AuthService::new(db, &tokens, TEST_COST)
        .signup(signup_param("Owner@Example.com", "secret1"))
        .await?;

    assert_eq!(session.email, "owner@example.com");

    let (academy, password_hash) = AcademyRepository::new(db)
        .find_credentials_by_email("owner@example.com")
        .await?
        .unwrap();
    assert_eq!(academy.id, session.academy_id);
    assert!(academy.players.is_empty());
    assert_ne!(password_hash, "secret1");
    assert!(bcrypt::verify("secret1", &password_hash).unwrap());

    let identity = tokens.verify(&session.token)?;
    assert_eq!(identity.academy_id, academy.id);
    assert_eq!(identity.email, "owner@example.com");

    Ok(())
}

/// Tests signing up twice with the same email, differing only in case.
///
/// Expected: Err(EmailTaken) and a single academy stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
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
        .signup(signup_param("OWNER@example.com", "secret2"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken(_)))
    ));

    let academies = AcademyRepository::new(db).get_all().await?;
    assert_eq!(academies.len(), 1);

    Ok(())
}
